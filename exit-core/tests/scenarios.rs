//! End-to-end scenarios exercising both engines against the shipped
//! reference tables.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use exit_core::{
    CalculationError, Currency, ExitScenario, calculate_lcge, calculate_qsbs, progressive_tax,
};

fn usd_scenario(exit_value: Decimal, cost_basis: Decimal) -> ExitScenario {
    ExitScenario {
        ownership_percentage: dec!(100),
        exit_value,
        cost_basis,
        currency: Currency::Usd,
    }
}

fn cad_scenario(exit_value: Decimal, cost_basis: Decimal) -> ExitScenario {
    ExitScenario {
        currency: Currency::Cad,
        ..usd_scenario(exit_value, cost_basis)
    }
}

#[test]
fn ten_million_exit_is_fully_exempt_under_qsbs() {
    let result = calculate_qsbs(&usd_scenario(dec!(10000000), dec!(0)), Some("CA")).unwrap();

    assert_eq!(result.capital_gains, dec!(10000000));
    assert_eq!(result.exempt_gains, dec!(10000000));
    assert_eq!(result.taxable_gains, dec!(0));
    assert_eq!(result.total_tax, dec!(0));
    assert_eq!(result.after_tax_proceeds, dec!(10000000));
}

#[test]
fn hundred_million_exit_is_taxed_above_the_qsbs_cap() {
    let result = calculate_qsbs(&usd_scenario(dec!(100000000), dec!(0)), Some("CA")).unwrap();

    assert_eq!(result.exemption_amount, dec!(15000000));
    assert_eq!(result.taxable_gains, dec!(85000000));
    // Federal LTCG: 333200 * 0.15 + 84623800 * 0.20
    assert_eq!(result.federal_tax, dec!(16974740));
    // CA brackets on 85M plus the 1% surcharge on the 84M over $1M.
    assert_eq!(result.state_tax, dec!(11279549.368));
    assert_eq!(result.total_tax, dec!(28254289.368));
    assert_eq!(result.after_tax_proceeds, dec!(71745710.632));
}

#[test]
fn lcge_covers_the_first_one_and_a_quarter_million() {
    let result = calculate_lcge(&cad_scenario(dec!(1250000), dec!(0)), Some("ON")).unwrap();

    assert_eq!(result.gain, dec!(1250000));
    assert_eq!(result.exempt_amount, dec!(1250000));
    assert_eq!(result.taxable_amount, dec!(0));
    assert_eq!(result.total_tax, dec!(0));
    assert_eq!(result.after_tax_amount, dec!(1250000));
}

#[test]
fn lcge_taxes_half_of_the_gain_above_the_exemption() {
    let result = calculate_lcge(&cad_scenario(dec!(2250000), dec!(0)), Some("ON")).unwrap();

    assert_eq!(result.exempt_amount, dec!(1250000));
    assert_eq!(result.taxable_amount, dec!(500000));
    // Federal on 500000, band by band:
    //   55867 * 0.15 + 55866 * 0.205 + 61472 * 0.26 + 73547 * 0.29
    //   + 253248 * 0.33 = 140715.77
    assert_eq!(result.federal_tax, dec!(140715.77));
    // Ontario on 500000, band by band:
    //   51446 * 0.0505 + 51448 * 0.0915 + 47106 * 0.1116 + 70000 * 0.1216
    //   + 280000 * 0.1316 = 57922.5446
    assert_eq!(result.provincial_tax, dec!(57922.5446));
    assert_eq!(result.total_tax, dec!(198638.3146));
}

#[test]
fn unknown_jurisdictions_are_rejected_by_both_engines() {
    let scenario = usd_scenario(dec!(1000000), dec!(0));

    assert_eq!(
        calculate_qsbs(&scenario, Some("ZZ")).unwrap_err(),
        CalculationError::InvalidJurisdiction("ZZ".to_string())
    );
    assert_eq!(
        calculate_lcge(&scenario, Some("ZZ")).unwrap_err(),
        CalculationError::InvalidJurisdiction("ZZ".to_string())
    );
}

#[test]
fn total_tax_is_never_negative_and_never_exceeds_the_proceeds() {
    for exit_value in [0, 100000, 1250000, 10000000, 75000000] {
        let exit_value = Decimal::from(exit_value);

        let qsbs = calculate_qsbs(&usd_scenario(exit_value, dec!(0)), Some("CA")).unwrap();
        assert!(qsbs.total_tax >= Decimal::ZERO);
        assert!(qsbs.after_tax_proceeds <= qsbs.personal_exit_value);

        let lcge = calculate_lcge(&cad_scenario(exit_value, dec!(0)), Some("ON")).unwrap();
        assert!(lcge.total_tax >= Decimal::ZERO);
        assert!(lcge.after_tax_amount <= lcge.personal_exit_value);
    }
}

#[test]
fn progressive_tax_is_monotonic_over_the_shipped_tables() {
    let federal = exit_core::data::federal_brackets();
    let mut last = Decimal::ZERO;
    for income in (0..2000000).step_by(137331) {
        let tax = progressive_tax(Decimal::from(income), federal);
        assert!(tax >= last, "tax decreased at income {income}");
        last = tax;
    }
}

#[test]
fn engines_agree_across_currencies_up_to_conversion() {
    // The same exit expressed in USD and in CAD must produce the same tax
    // once both are viewed in CAD.
    let in_usd = calculate_lcge(&usd_scenario(dec!(2000000), dec!(0)), Some("BC")).unwrap();
    let in_cad = calculate_lcge(&cad_scenario(dec!(2740000), dec!(0)), Some("BC")).unwrap();

    assert_eq!(
        exit_core::calculations::fx::usd_to_cad(in_usd.total_tax).round_dp(6),
        in_cad.total_tax.round_dp(6)
    );
}
