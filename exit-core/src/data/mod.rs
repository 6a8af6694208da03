//! Static tax reference data for the 2025 tax year.
//!
//! Bracket tables, exemption constants and default jurisdiction codes.
//! Everything here is built once on first use and never mutated; the set of
//! recognized jurisdiction codes is fixed at compile time.

mod canada;
mod us;

use rust_decimal::Decimal;

use crate::models::TaxBracket;

pub use canada::{
    DEFAULT_PROVINCE, INCLUSION_RATE, LCGE_EXEMPTION_CAD, federal_brackets, province,
    province_codes,
};
pub use us::{
    DEFAULT_STATE, HIGH_INCOME_ADD_ON_RATE, HIGH_INCOME_ADD_ON_THRESHOLD_USD,
    QSBS_BASIS_MULTIPLE, QSBS_EXEMPTION_FLOOR_USD, federal_ltcg_brackets, state_codes, us_state,
};

fn band(min: Decimal, max: Decimal, rate: Decimal) -> TaxBracket {
    TaxBracket {
        min,
        max: Some(max),
        rate,
    }
}

fn top(min: Decimal, rate: Decimal) -> TaxBracket {
    TaxBracket {
        min,
        max: None,
        rate,
    }
}
