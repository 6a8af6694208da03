//! Lifetime Capital Gains Exemption engine.
//!
//! Computes Canadian federal and provincial liability on a startup exit
//! after applying the LCGE: the first $1.25M CAD of gain is exempt, and the
//! 50% inclusion rate applies only to the remainder. Both levels of tax use
//! the progressive brackets of the selected jurisdiction.
//!
//! All internal arithmetic is in CAD; inputs are normalized on entry and
//! every monetary output is converted back to the scenario's currency.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::CalculationError;
use crate::calculations::fx::{from_cad, to_cad};
use crate::calculations::progressive::progressive_tax;
use crate::data;
use crate::models::{ExitScenario, Jurisdiction, LcgeCalculation};

/// Computes the LCGE outcome for `scenario` under `province_code`'s tax
/// tables.
///
/// Falls back to the default province when `province_code` is `None`.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidJurisdiction`] when the province code
/// has no reference table entry.
pub fn calculate_lcge(
    scenario: &ExitScenario,
    province_code: Option<&str>,
) -> Result<LcgeCalculation, CalculationError> {
    let code = province_code.unwrap_or(data::DEFAULT_PROVINCE);
    Ok(LcgeCalculator::for_province(code)?.calculate(scenario))
}

/// LCGE calculator bound to one province's or territory's tax tables.
#[derive(Debug, Clone)]
pub struct LcgeCalculator<'a> {
    province: &'a Jurisdiction,
}

impl<'a> LcgeCalculator<'a> {
    /// Creates a calculator over the given provincial tables.
    pub fn new(province: &'a Jurisdiction) -> Self {
        Self { province }
    }

    /// Looks up the province in the reference data.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidJurisdiction`] when
    /// `province_code` has no reference table entry.
    pub fn for_province(province_code: &str) -> Result<Self, CalculationError> {
        let province = data::province(province_code)
            .ok_or_else(|| CalculationError::InvalidJurisdiction(province_code.to_string()))?;
        Ok(Self::new(province))
    }

    /// Runs the full LCGE calculation. Pure; a fresh result per call.
    pub fn calculate(&self, scenario: &ExitScenario) -> LcgeCalculation {
        let currency = scenario.currency;

        let exit_value = to_cad(scenario.exit_value, currency);
        let cost_basis = to_cad(scenario.cost_basis, currency);

        let stake = scenario.ownership_percentage / Decimal::ONE_HUNDRED;
        let personal_exit_value = exit_value * stake;
        let personal_cost_basis = cost_basis * stake;
        let gain = personal_exit_value - personal_cost_basis;

        if gain <= Decimal::ZERO {
            debug!(%gain, "no capital gain, skipping tax computation");
            return LcgeCalculation {
                personal_exit_value: from_cad(personal_exit_value, currency),
                gain: Decimal::ZERO,
                exempt_amount: Decimal::ZERO,
                taxable_amount: Decimal::ZERO,
                federal_tax: Decimal::ZERO,
                provincial_tax: Decimal::ZERO,
                total_tax: Decimal::ZERO,
                after_tax_amount: from_cad(personal_exit_value, currency),
                effective_rate: Decimal::ZERO,
                currency,
            };
        }

        let exempt_amount = gain.min(data::LCGE_EXEMPTION_CAD);
        let remaining_gain = gain - exempt_amount;
        let taxable_amount = remaining_gain * data::INCLUSION_RATE;

        let federal_tax = progressive_tax(taxable_amount, data::federal_brackets());
        let provincial_tax = progressive_tax(taxable_amount, &self.province.brackets);
        let total_tax = federal_tax + provincial_tax;
        let after_tax_amount = personal_exit_value - total_tax;
        let effective_rate = total_tax / gain;

        LcgeCalculation {
            personal_exit_value: from_cad(personal_exit_value, currency),
            gain: from_cad(gain, currency),
            exempt_amount: from_cad(exempt_amount, currency),
            taxable_amount: from_cad(taxable_amount, currency),
            federal_tax: from_cad(federal_tax, currency),
            provincial_tax: from_cad(provincial_tax, currency),
            total_tax: from_cad(total_tax, currency),
            after_tax_amount: from_cad(after_tax_amount, currency),
            effective_rate,
            currency,
        }
    }
}
