use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// Result of a Lifetime Capital Gains Exemption calculation.
///
/// Every monetary field is denominated in `currency` (the currency the
/// scenario was entered in). Freshly allocated per calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcgeCalculation {
    /// The shareholder's slice of the exit value.
    pub personal_exit_value: Decimal,

    /// Personal exit value minus personal cost basis (zero when no gain).
    pub gain: Decimal,

    /// Portion of the gain covered by the exemption.
    pub exempt_amount: Decimal,

    /// Income added to the tax base: the non-exempt gain after the 50%
    /// inclusion rate.
    pub taxable_amount: Decimal,

    /// Federal tax on the taxable amount.
    pub federal_tax: Decimal,

    /// Provincial/territorial tax on the taxable amount.
    pub provincial_tax: Decimal,

    /// Federal plus provincial tax.
    pub total_tax: Decimal,

    /// Personal exit value minus total tax.
    pub after_tax_amount: Decimal,

    /// Total tax as a fraction of the gain (zero when no gain).
    pub effective_rate: Decimal,

    /// Currency of every monetary field above.
    pub currency: Currency,
}
