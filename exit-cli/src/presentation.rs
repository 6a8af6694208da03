//! Terminal rendering of calculation results.
//!
//! This is the only place amounts are rounded; the engines return exact
//! figures.

use std::fmt::Write;

use rust_decimal::Decimal;

use exit_core::Currency;
use exit_core::calculations::common::round_half_up;

use crate::comparison::{Comparison, SweepPoint};

/// Formats an amount as e.g. `$1,234,567.89`, rounded to cents.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{frac_part:0<2}")),
        None => (text, "00".to_string()),
    };

    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(&int_part))
}

/// Formats a fractional rate as a percentage with two decimals.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).round_dp(2))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders the side-by-side breakdown of one scenario.
pub fn render_comparison(comparison: &Comparison) -> String {
    let currency = comparison.qsbs.currency.as_str();
    let qsbs = &comparison.qsbs;
    let lcge = &comparison.lcge;

    let rows: [(&str, Decimal, Decimal); 7] = [
        ("Personal exit value", qsbs.personal_exit_value, lcge.personal_exit_value),
        ("Capital gain", qsbs.capital_gains, lcge.gain),
        ("Exempt", qsbs.exempt_gains, lcge.exempt_amount),
        ("Taxable", qsbs.taxable_gains, lcge.taxable_amount),
        ("Federal tax", qsbs.federal_tax, lcge.federal_tax),
        ("State/provincial tax", qsbs.state_tax, lcge.provincial_tax),
        ("Total tax", qsbs.total_tax, lcge.total_tax),
    ];

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<22} {:>20} {:>20}",
        format!("All amounts in {currency}"),
        format!("US ({})", comparison.state),
        format!("Canada ({})", comparison.province),
    );
    for (label, us, canada) in rows {
        let _ = writeln!(
            out,
            "{label:<22} {:>20} {:>20}",
            format_money(us),
            format_money(canada)
        );
    }
    let _ = writeln!(
        out,
        "{:<22} {:>20} {:>20}",
        "After-tax proceeds",
        format_money(qsbs.after_tax_proceeds),
        format_money(lcge.after_tax_amount)
    );
    let _ = writeln!(
        out,
        "{:<22} {:>20} {:>20}",
        "Effective rate",
        format_percent(qsbs.effective_rate),
        format_percent(lcge.effective_rate)
    );

    let delta = comparison.after_tax_delta();
    if delta > Decimal::ZERO {
        let _ = write!(
            out,
            "US ({}) keeps {} more after tax",
            comparison.state,
            format_money(delta)
        );
    } else if delta < Decimal::ZERO {
        let _ = write!(
            out,
            "Canada ({}) keeps {} more after tax",
            comparison.province,
            format_money(-delta)
        );
    } else {
        let _ = write!(out, "Both sides keep the same after-tax amount");
    }

    out
}

/// Renders the after-tax comparison across the standard exit sizes.
pub fn render_sweep(points: &[SweepPoint], currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:>20} {:>20}",
        format!("Exit ({})", currency.as_str()),
        "US after tax",
        "Canada after tax"
    );
    for point in points {
        let _ = writeln!(
            out,
            "{:<16} {:>20} {:>20}",
            format_money(point.exit_value),
            format_money(point.qsbs_after_tax),
            format_money(point.lcge_after_tax)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::comparison::compare;
    use exit_core::ExitScenario;

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(dec!(0)), "$0.00");
        assert_eq!(format_money(dec!(999)), "$999.00");
        assert_eq!(format_money(dec!(1000)), "$1,000.00");
        assert_eq!(format_money(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_money(dec!(75000000)), "$75,000,000.00");
    }

    #[test]
    fn format_money_handles_negative_amounts() {
        assert_eq!(format_money(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn format_percent_rounds_to_two_decimals() {
        assert_eq!(format_percent(dec!(0)), "0%");
        assert_eq!(format_percent(dec!(0.28254289368)), "28.25%");
    }

    #[test]
    fn rendered_comparison_names_both_jurisdictions() {
        let scenario = ExitScenario {
            ownership_percentage: dec!(100),
            exit_value: dec!(10000000),
            cost_basis: dec!(0),
            currency: exit_core::Currency::Usd,
        };
        let rendered = render_comparison(&compare(&scenario, "CA", "ON").unwrap());

        assert!(rendered.contains("US (CA)"));
        assert!(rendered.contains("Canada (ON)"));
        assert!(rendered.contains("After-tax proceeds"));
        assert!(rendered.contains("keeps"));
    }
}
