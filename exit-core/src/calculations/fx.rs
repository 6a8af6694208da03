//! Fixed-rate currency conversion between USD and CAD.
//!
//! A single compile-time rate; the converter never rounds. Rounding, if any,
//! is a presentation concern. If live rates were ever needed this would
//! become an injected rate provider instead of a module constant.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Currency;

/// Value of 1 USD in CAD.
pub const USD_TO_CAD_RATE: Decimal = dec!(1.37);

/// Converts a USD amount to CAD. Exact, no rounding.
pub fn usd_to_cad(amount: Decimal) -> Decimal {
    amount * USD_TO_CAD_RATE
}

/// Converts a CAD amount to USD. Exact up to `Decimal` precision, no rounding.
pub fn cad_to_usd(amount: Decimal) -> Decimal {
    amount / USD_TO_CAD_RATE
}

/// Normalizes an amount denominated in `currency` to USD.
pub fn to_usd(amount: Decimal, currency: Currency) -> Decimal {
    match currency {
        Currency::Usd => amount,
        Currency::Cad => cad_to_usd(amount),
    }
}

/// Converts a USD amount into `currency`.
pub fn from_usd(amount: Decimal, currency: Currency) -> Decimal {
    match currency {
        Currency::Usd => amount,
        Currency::Cad => usd_to_cad(amount),
    }
}

/// Normalizes an amount denominated in `currency` to CAD.
pub fn to_cad(amount: Decimal, currency: Currency) -> Decimal {
    match currency {
        Currency::Usd => usd_to_cad(amount),
        Currency::Cad => amount,
    }
}

/// Converts a CAD amount into `currency`.
pub fn from_cad(amount: Decimal, currency: Currency) -> Decimal {
    match currency {
        Currency::Usd => cad_to_usd(amount),
        Currency::Cad => amount,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn usd_to_cad_multiplies_by_the_rate() {
        assert_eq!(usd_to_cad(dec!(100)), dec!(137.00));
        assert_eq!(usd_to_cad(dec!(0)), dec!(0));
    }

    #[test]
    fn cad_to_usd_divides_by_the_rate() {
        assert_eq!(cad_to_usd(dec!(137)), dec!(100));
        assert_eq!(cad_to_usd(dec!(0)), dec!(0));
    }

    #[test]
    fn usd_cad_usd_round_trip_is_exact() {
        for amount in [dec!(1), dec!(0.01), dec!(12345.67), dec!(15000000)] {
            assert_eq!(cad_to_usd(usd_to_cad(amount)), amount);
        }
    }

    #[test]
    fn cad_usd_cad_round_trip_is_exact_for_terminating_quotients() {
        for amount in [dec!(1.37), dec!(137), dec!(1370000), dec!(2.74)] {
            assert_eq!(usd_to_cad(cad_to_usd(amount)), amount);
        }
    }

    #[test]
    fn same_currency_normalization_is_identity() {
        assert_eq!(to_usd(dec!(42.50), Currency::Usd), dec!(42.50));
        assert_eq!(to_cad(dec!(42.50), Currency::Cad), dec!(42.50));
        assert_eq!(from_usd(dec!(42.50), Currency::Usd), dec!(42.50));
        assert_eq!(from_cad(dec!(42.50), Currency::Cad), dec!(42.50));
    }

    #[test]
    fn cross_currency_normalization_converts() {
        assert_eq!(to_usd(dec!(137), Currency::Cad), dec!(100));
        assert_eq!(to_cad(dec!(100), Currency::Usd), dec!(137.00));
        assert_eq!(from_usd(dec!(100), Currency::Cad), dec!(137.00));
        assert_eq!(from_cad(dec!(137), Currency::Usd), dec!(100));
    }
}
