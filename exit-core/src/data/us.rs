use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{band, top};
use crate::models::{Jurisdiction, TaxBracket};

/// State used when the caller does not pick one.
pub const DEFAULT_STATE: &str = "CA";

/// QSBS exclusion floor: this much gain is exempt regardless of basis.
pub const QSBS_EXEMPTION_FLOOR_USD: Decimal = dec!(15000000);

/// The exclusion alternatively covers this multiple of the cost basis,
/// whichever is greater.
pub const QSBS_BASIS_MULTIPLE: Decimal = dec!(10);

/// Taxable gains above this amount attract the surcharge in states flagged
/// with `has_high_income_add_on`.
pub const HIGH_INCOME_ADD_ON_THRESHOLD_USD: Decimal = dec!(1000000);

/// Surcharge rate on the portion above the threshold.
pub const HIGH_INCOME_ADD_ON_RATE: Decimal = dec!(0.01);

/// 2025 federal long-term capital gains brackets (USD).
static FEDERAL_LTCG_BRACKETS: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    vec![
        band(dec!(0), dec!(43000), dec!(0.0)),
        band(dec!(43000), dec!(376200), dec!(0.15)),
        top(dec!(376200), dec!(0.20)),
    ]
});

/// 2025 state income tax tables (USD), keyed by postal abbreviation.
static US_STATES: LazyLock<BTreeMap<&'static str, Jurisdiction>> = LazyLock::new(|| {
    BTreeMap::from([(
        "CA",
        Jurisdiction {
            name: "California".to_string(),
            brackets: vec![
                band(dec!(0), dec!(8932), dec!(0.01)),
                band(dec!(8932), dec!(21175), dec!(0.02)),
                band(dec!(21175), dec!(33421), dec!(0.04)),
                band(dec!(33421), dec!(46394), dec!(0.06)),
                band(dec!(46394), dec!(58634), dec!(0.08)),
                band(dec!(58634), dec!(299508), dec!(0.093)),
                band(dec!(299508), dec!(359407), dec!(0.103)),
                band(dec!(359407), dec!(599012), dec!(0.113)),
                top(dec!(599012), dec!(0.123)),
            ],
            has_high_income_add_on: true,
        },
    )])
});

pub fn federal_ltcg_brackets() -> &'static [TaxBracket] {
    &FEDERAL_LTCG_BRACKETS
}

/// Looks up a state's tax tables by postal abbreviation.
pub fn us_state(code: &str) -> Option<&'static Jurisdiction> {
    US_STATES.get(code)
}

/// Recognized state codes, sorted.
pub fn state_codes() -> Vec<&'static str> {
    US_STATES.keys().copied().collect()
}
