use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{band, top};
use crate::models::{Jurisdiction, TaxBracket};

/// Province used when the caller does not pick one.
pub const DEFAULT_PROVINCE: &str = "ON";

/// Lifetime Capital Gains Exemption limit (2025, CAD).
pub const LCGE_EXEMPTION_CAD: Decimal = dec!(1250000);

/// Fraction of the non-exempt gain counted as taxable income.
pub const INCLUSION_RATE: Decimal = dec!(0.50);

/// 2025 federal tax brackets (CAD).
static FEDERAL_BRACKETS: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    vec![
        band(dec!(0), dec!(55867), dec!(0.15)),
        band(dec!(55867), dec!(111733), dec!(0.205)),
        band(dec!(111733), dec!(173205), dec!(0.26)),
        band(dec!(173205), dec!(246752), dec!(0.29)),
        top(dec!(246752), dec!(0.33)),
    ]
});

/// 2025 provincial/territorial tax tables (CAD), keyed by postal abbreviation.
static PROVINCES: LazyLock<BTreeMap<&'static str, Jurisdiction>> = LazyLock::new(|| {
    BTreeMap::from([
        (
            "AB",
            province_table(
                "Alberta",
                vec![
                    band(dec!(0), dec!(148269), dec!(0.10)),
                    band(dec!(148269), dec!(177922), dec!(0.12)),
                    band(dec!(177922), dec!(237230), dec!(0.13)),
                    band(dec!(237230), dec!(355845), dec!(0.14)),
                    top(dec!(355845), dec!(0.15)),
                ],
            ),
        ),
        (
            "BC",
            province_table(
                "British Columbia",
                vec![
                    band(dec!(0), dec!(47937), dec!(0.0506)),
                    band(dec!(47937), dec!(95875), dec!(0.077)),
                    band(dec!(95875), dec!(110076), dec!(0.105)),
                    band(dec!(110076), dec!(133664), dec!(0.1229)),
                    band(dec!(133664), dec!(181232), dec!(0.147)),
                    band(dec!(181232), dec!(252752), dec!(0.168)),
                    top(dec!(252752), dec!(0.205)),
                ],
            ),
        ),
        (
            "MB",
            province_table(
                "Manitoba",
                vec![
                    band(dec!(0), dec!(47000), dec!(0.108)),
                    band(dec!(47000), dec!(100000), dec!(0.1275)),
                    top(dec!(100000), dec!(0.174)),
                ],
            ),
        ),
        (
            "NB",
            province_table(
                "New Brunswick",
                vec![
                    band(dec!(0), dec!(49958), dec!(0.094)),
                    band(dec!(49958), dec!(99916), dec!(0.14)),
                    band(dec!(99916), dec!(185064), dec!(0.16)),
                    top(dec!(185064), dec!(0.195)),
                ],
            ),
        ),
        (
            "NL",
            province_table(
                "Newfoundland and Labrador",
                vec![
                    band(dec!(0), dec!(43198), dec!(0.087)),
                    band(dec!(43198), dec!(86395), dec!(0.145)),
                    band(dec!(86395), dec!(154244), dec!(0.158)),
                    band(dec!(154244), dec!(215943), dec!(0.178)),
                    band(dec!(215943), dec!(275870), dec!(0.198)),
                    band(dec!(275870), dec!(551739), dec!(0.208)),
                    band(dec!(551739), dec!(1103478), dec!(0.213)),
                    top(dec!(1103478), dec!(0.218)),
                ],
            ),
        ),
        (
            "NS",
            province_table(
                "Nova Scotia",
                vec![
                    band(dec!(0), dec!(29590), dec!(0.0879)),
                    band(dec!(29590), dec!(59180), dec!(0.1495)),
                    band(dec!(59180), dec!(93000), dec!(0.1667)),
                    band(dec!(93000), dec!(150000), dec!(0.175)),
                    top(dec!(150000), dec!(0.21)),
                ],
            ),
        ),
        (
            "NT",
            province_table(
                "Northwest Territories",
                vec![
                    band(dec!(0), dec!(50597), dec!(0.059)),
                    band(dec!(50597), dec!(101198), dec!(0.086)),
                    band(dec!(101198), dec!(164525), dec!(0.122)),
                    top(dec!(164525), dec!(0.1405)),
                ],
            ),
        ),
        (
            "NU",
            province_table(
                "Nunavut",
                vec![
                    band(dec!(0), dec!(53268), dec!(0.04)),
                    band(dec!(53268), dec!(106537), dec!(0.07)),
                    band(dec!(106537), dec!(173205), dec!(0.09)),
                    top(dec!(173205), dec!(0.115)),
                ],
            ),
        ),
        (
            "ON",
            province_table(
                "Ontario",
                vec![
                    band(dec!(0), dec!(51446), dec!(0.0505)),
                    band(dec!(51446), dec!(102894), dec!(0.0915)),
                    band(dec!(102894), dec!(150000), dec!(0.1116)),
                    band(dec!(150000), dec!(220000), dec!(0.1216)),
                    top(dec!(220000), dec!(0.1316)),
                ],
            ),
        ),
        (
            "PE",
            province_table(
                "Prince Edward Island",
                vec![
                    band(dec!(0), dec!(32656), dec!(0.0965)),
                    band(dec!(32656), dec!(64313), dec!(0.1363)),
                    band(dec!(64313), dec!(105000), dec!(0.1665)),
                    band(dec!(105000), dec!(140000), dec!(0.18)),
                    top(dec!(140000), dec!(0.1875)),
                ],
            ),
        ),
        (
            "QC",
            province_table(
                "Quebec",
                vec![
                    band(dec!(0), dec!(51780), dec!(0.14)),
                    band(dec!(51780), dec!(103545), dec!(0.19)),
                    band(dec!(103545), dec!(126000), dec!(0.24)),
                    top(dec!(126000), dec!(0.2575)),
                ],
            ),
        ),
        (
            "SK",
            province_table(
                "Saskatchewan",
                vec![
                    band(dec!(0), dec!(52057), dec!(0.105)),
                    band(dec!(52057), dec!(148734), dec!(0.125)),
                    top(dec!(148734), dec!(0.145)),
                ],
            ),
        ),
        (
            "YT",
            province_table(
                "Yukon",
                vec![
                    band(dec!(0), dec!(55867), dec!(0.064)),
                    band(dec!(55867), dec!(111733), dec!(0.09)),
                    band(dec!(111733), dec!(173205), dec!(0.109)),
                    band(dec!(173205), dec!(500000), dec!(0.128)),
                    top(dec!(500000), dec!(0.15)),
                ],
            ),
        ),
    ])
});

fn province_table(name: &str, brackets: Vec<TaxBracket>) -> Jurisdiction {
    Jurisdiction {
        name: name.to_string(),
        brackets,
        has_high_income_add_on: false,
    }
}

pub fn federal_brackets() -> &'static [TaxBracket] {
    &FEDERAL_BRACKETS
}

/// Looks up a province's or territory's tax tables by postal abbreviation.
pub fn province(code: &str) -> Option<&'static Jurisdiction> {
    PROVINCES.get(code)
}

/// Recognized province/territory codes, sorted.
pub fn province_codes() -> Vec<&'static str> {
    PROVINCES.keys().copied().collect()
}
