//! Side-by-side evaluation of the two exemption regimes.

use rust_decimal::Decimal;

use exit_core::{
    CalculationError, Currency, ExitScenario, LcgeCalculation, QsbsCalculation, calculate_lcge,
    calculate_qsbs,
};

/// Exit sizes swept by the comparison table, in the scenario's currency.
pub const SWEEP_EXIT_SIZES: [i64; 6] = [
    1_000_000, 5_000_000, 10_000_000, 25_000_000, 50_000_000, 75_000_000,
];

/// Both regimes evaluated against the same scenario.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub state: String,
    pub province: String,
    pub qsbs: QsbsCalculation,
    pub lcge: LcgeCalculation,
}

impl Comparison {
    /// After-tax difference; positive when the US (QSBS) side keeps more.
    pub fn after_tax_delta(&self) -> Decimal {
        self.qsbs.after_tax_proceeds - self.lcge.after_tax_amount
    }
}

/// Runs both engines over one scenario.
pub fn compare(
    scenario: &ExitScenario,
    state: &str,
    province: &str,
) -> Result<Comparison, CalculationError> {
    Ok(Comparison {
        state: state.to_string(),
        province: province.to_string(),
        qsbs: calculate_qsbs(scenario, Some(state))?,
        lcge: calculate_lcge(scenario, Some(province))?,
    })
}

/// One sweep row: a hypothetical exit size and both after-tax outcomes.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub exit_value: Decimal,
    pub qsbs_after_tax: Decimal,
    pub lcge_after_tax: Decimal,
}

/// Evaluates both regimes across the standard exit sizes with zero cost
/// basis, holding ownership, currency and jurisdictions fixed.
pub fn sweep(
    ownership_percentage: Decimal,
    currency: Currency,
    state: &str,
    province: &str,
) -> Result<Vec<SweepPoint>, CalculationError> {
    SWEEP_EXIT_SIZES
        .iter()
        .map(|&size| {
            let scenario = ExitScenario {
                ownership_percentage,
                exit_value: Decimal::from(size),
                cost_basis: Decimal::ZERO,
                currency,
            };
            let comparison = compare(&scenario, state, province)?;
            Ok(SweepPoint {
                exit_value: scenario.exit_value,
                qsbs_after_tax: comparison.qsbs.after_tax_proceeds,
                lcge_after_tax: comparison.lcge.after_tax_amount,
            })
        })
        .collect()
}
