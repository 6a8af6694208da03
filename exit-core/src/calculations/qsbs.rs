//! QSBS (Qualified Small Business Stock) exclusion engine.
//!
//! Computes US federal and state capital-gains liability on a startup exit
//! after applying the QSBS exclusion: the greater of the flat exemption
//! floor or ten times the shareholder's cost basis is exempt, and only the
//! remainder is taxed. Federal tax uses the long-term capital gains
//! schedule; state tax uses the selected state's income tax brackets plus
//! any high-income surcharge the state levies.
//!
//! All internal arithmetic is in USD; inputs are normalized on entry and
//! every monetary output is converted back to the scenario's currency.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::CalculationError;
use crate::calculations::fx::{from_usd, to_usd};
use crate::calculations::progressive::progressive_tax;
use crate::data;
use crate::models::{ExitScenario, Jurisdiction, QsbsCalculation};

/// Computes the QSBS outcome for `scenario` under `state_code`'s tax tables.
///
/// Falls back to the default state when `state_code` is `None`.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidJurisdiction`] when the state code has
/// no reference table entry.
pub fn calculate_qsbs(
    scenario: &ExitScenario,
    state_code: Option<&str>,
) -> Result<QsbsCalculation, CalculationError> {
    let code = state_code.unwrap_or(data::DEFAULT_STATE);
    Ok(QsbsCalculator::for_state(code)?.calculate(scenario))
}

/// QSBS exclusion calculator bound to one state's tax tables.
#[derive(Debug, Clone)]
pub struct QsbsCalculator<'a> {
    state: &'a Jurisdiction,
}

impl<'a> QsbsCalculator<'a> {
    /// Creates a calculator over the given state tables.
    pub fn new(state: &'a Jurisdiction) -> Self {
        Self { state }
    }

    /// Looks up the state in the reference data.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidJurisdiction`] when `state_code`
    /// has no reference table entry.
    pub fn for_state(state_code: &str) -> Result<Self, CalculationError> {
        let state = data::us_state(state_code)
            .ok_or_else(|| CalculationError::InvalidJurisdiction(state_code.to_string()))?;
        Ok(Self::new(state))
    }

    /// Runs the full QSBS calculation. Pure; a fresh result per call.
    pub fn calculate(&self, scenario: &ExitScenario) -> QsbsCalculation {
        let currency = scenario.currency;

        let exit_value = to_usd(scenario.exit_value, currency);
        let cost_basis = to_usd(scenario.cost_basis, currency);

        let stake = scenario.ownership_percentage / Decimal::ONE_HUNDRED;
        let personal_exit_value = exit_value * stake;
        let personal_cost_basis = cost_basis * stake;
        let capital_gains = personal_exit_value - personal_cost_basis;

        if capital_gains <= Decimal::ZERO {
            debug!(%capital_gains, "no capital gain, skipping tax computation");
            return QsbsCalculation {
                personal_exit_value: from_usd(personal_exit_value, currency),
                capital_gains: Decimal::ZERO,
                exemption_amount: Decimal::ZERO,
                exempt_gains: Decimal::ZERO,
                taxable_gains: Decimal::ZERO,
                federal_tax: Decimal::ZERO,
                state_tax: Decimal::ZERO,
                total_tax: Decimal::ZERO,
                after_tax_proceeds: from_usd(personal_exit_value, currency),
                effective_rate: Decimal::ZERO,
                currency,
            };
        }

        let exemption_amount =
            data::QSBS_EXEMPTION_FLOOR_USD.max(personal_cost_basis * data::QSBS_BASIS_MULTIPLE);
        let exempt_gains = capital_gains.min(exemption_amount);
        let taxable_gains = (capital_gains - exempt_gains).max(Decimal::ZERO);

        let federal_tax = progressive_tax(taxable_gains, data::federal_ltcg_brackets());
        let state_tax = self.state_tax(taxable_gains);
        let total_tax = federal_tax + state_tax;
        let after_tax_proceeds = personal_exit_value - total_tax;
        let effective_rate = total_tax / capital_gains;

        QsbsCalculation {
            personal_exit_value: from_usd(personal_exit_value, currency),
            capital_gains: from_usd(capital_gains, currency),
            exemption_amount: from_usd(exemption_amount, currency),
            exempt_gains: from_usd(exempt_gains, currency),
            taxable_gains: from_usd(taxable_gains, currency),
            federal_tax: from_usd(federal_tax, currency),
            state_tax: from_usd(state_tax, currency),
            total_tax: from_usd(total_tax, currency),
            after_tax_proceeds: from_usd(after_tax_proceeds, currency),
            effective_rate,
            currency,
        }
    }

    /// State bracket tax plus the high-income surcharge where the state
    /// levies one.
    fn state_tax(&self, taxable_gains: Decimal) -> Decimal {
        let mut tax = progressive_tax(taxable_gains, &self.state.brackets);
        if self.state.has_high_income_add_on {
            tax += high_income_add_on(taxable_gains);
        }
        tax
    }
}

/// Flat surcharge on the portion of taxable gains above the high-income
/// threshold. Additive to the bracket tax, not itself bracket-based.
fn high_income_add_on(taxable_gains: Decimal) -> Decimal {
    if taxable_gains > data::HIGH_INCOME_ADD_ON_THRESHOLD_USD {
        (taxable_gains - data::HIGH_INCOME_ADD_ON_THRESHOLD_USD) * data::HIGH_INCOME_ADD_ON_RATE
    } else {
        Decimal::ZERO
    }
}
