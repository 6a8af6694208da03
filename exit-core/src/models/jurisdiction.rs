use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// Reference data for one taxing jurisdiction (a US state or a Canadian
/// province/territory). Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Display name, e.g. "California" or "Ontario".
    pub name: String,

    /// Marginal brackets, contiguous and sorted ascending by `min`, with
    /// exactly one unbounded top bracket.
    pub brackets: Vec<TaxBracket>,

    /// Set for jurisdictions that levy an extra flat surcharge on the
    /// portion of income above a fixed threshold, outside the bracket
    /// model (California's 1% mental health services tax over $1M).
    #[serde(default)]
    pub has_high_income_add_on: bool,
}
