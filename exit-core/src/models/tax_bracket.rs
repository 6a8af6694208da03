use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A marginal tax band. `max` is `None` for the unbounded top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}
