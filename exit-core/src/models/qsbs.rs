use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// Result of a QSBS exclusion calculation.
///
/// Every monetary field is denominated in `currency` (the currency the
/// scenario was entered in). Freshly allocated per calculation; callers own
/// the value and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QsbsCalculation {
    /// The shareholder's slice of the exit value.
    pub personal_exit_value: Decimal,

    /// Personal exit value minus personal cost basis (zero when no gain).
    pub capital_gains: Decimal,

    /// The exclusion ceiling: greater of the flat floor or 10x cost basis.
    pub exemption_amount: Decimal,

    /// Portion of the gain covered by the exclusion.
    pub exempt_gains: Decimal,

    /// Portion of the gain that remains taxable.
    pub taxable_gains: Decimal,

    /// Federal long-term capital gains tax on the taxable portion.
    pub federal_tax: Decimal,

    /// State income tax on the taxable portion, including any
    /// high-income surcharge the state levies.
    pub state_tax: Decimal,

    /// Federal plus state tax.
    pub total_tax: Decimal,

    /// Personal exit value minus total tax.
    pub after_tax_proceeds: Decimal,

    /// Total tax as a fraction of the capital gain (zero when no gain).
    pub effective_rate: Decimal,

    /// Currency of every monetary field above.
    pub currency: Currency,
}
