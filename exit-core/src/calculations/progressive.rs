//! Marginal (progressive) bracket taxation.

use rust_decimal::Decimal;

use crate::models::TaxBracket;

/// Total tax owed on `income` under marginal bracket taxation.
///
/// Each bracket's rate applies only to the portion of income that falls
/// within the bracket's span; the walk stops once the income is exhausted,
/// and anything above the last finite boundary is taxed at the unbounded top
/// bracket's rate. Income at or below zero owes nothing.
///
/// Brackets must be denominated in one currency (callers convert beforehand)
/// and satisfy the table invariant: contiguous, sorted ascending by `min`,
/// exactly one unbounded top bracket. The reference tables in [`crate::data`]
/// all do.
pub fn progressive_tax(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut remaining = income;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable_in_bracket = match bracket.max {
            Some(max) => remaining.min(max - bracket.min),
            None => remaining,
        };

        tax += taxable_in_bracket * bracket.rate;
        remaining -= taxable_in_bracket;
    }

    tax
}
