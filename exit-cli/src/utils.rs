use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line amount cannot be parsed.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("percentage '{0}' must be between 0 and 100")]
    PercentageOutOfRange(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a monetary command-line argument into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"25,000,000"`). Empty or
/// whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses an ownership percentage and checks it lies within 0-100.
pub fn parse_percentage(s: &str) -> Result<Decimal, ParseAmountError> {
    let value = parse_amount(s)?;
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ParseAmountError::PercentageOutOfRange(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("25,000,000").unwrap(), dec!(25000000));
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_invalid_returns_error() {
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn parse_percentage_accepts_the_full_range() {
        assert_eq!(parse_percentage("0").unwrap(), dec!(0));
        assert_eq!(parse_percentage("37.5").unwrap(), dec!(37.5));
        assert_eq!(parse_percentage("100").unwrap(), dec!(100));
    }

    #[test]
    fn parse_percentage_rejects_out_of_range_values() {
        assert!(matches!(
            parse_percentage("100.01"),
            Err(ParseAmountError::PercentageOutOfRange(_))
        ));
        assert!(matches!(
            parse_percentage("-1"),
            Err(ParseAmountError::PercentageOutOfRange(_))
        ));
    }
}
