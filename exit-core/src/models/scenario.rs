use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// Inputs describing a hypothetical startup exit.
///
/// Both engines take the same shape: company-level exit value and cost basis
/// plus the shareholder's ownership percentage. Amounts are denominated in
/// `currency`; each engine normalizes to its home currency before computing
/// and converts every monetary output field back to `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitScenario {
    /// Shareholder's stake in the company, 0-100.
    pub ownership_percentage: Decimal,

    /// Total company exit value.
    pub exit_value: Decimal,

    /// Total cost basis of the shares.
    pub cost_basis: Decimal,

    /// Currency the amounts above are denominated in.
    pub currency: Currency,
}
