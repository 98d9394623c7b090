use std::fmt;

/// Money amounts are plain decimal numbers in the currency unit.
/// Parsing follows standard floating-point decimal parsing, so "25.50" -> 25.5.
pub type Amount = f64;

/// Format an amount with two decimal places.
/// Example: 50.0 -> "50.00", -12.5 -> "-12.50"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Format an amount prefixed by a currency symbol, the way the dashboard shows it.
/// Example: ("$", 60.0) -> "$60.00", ("$", -5.0) -> "$-5.00"
pub fn format_money(symbol: &str, amount: Amount) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

/// Parse user-typed text into an amount.
/// Surrounding whitespace is ignored. Signs, exponents and bare dots
/// ("+5", "1e3", ".5", "5.") are accepted; "inf" and "nan" are not.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let amount: Amount = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }

    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotFinite,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
            ParseAmountError::NotFinite => write!(f, "amount is not a finite number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(12.34), "12.34");
        assert_eq!(format_amount(1.0), "1.00");
        assert_eq!(format_amount(0.01), "0.01");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-50.0), "-50.00");
        assert_eq!(format_amount(25.5), "25.50");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 60.0), "$60.00");
        assert_eq!(format_money("€", 0.0), "€0.00");
        assert_eq!(format_money("$", -5.0), "$-5.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50.00"), Ok(50.0));
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount("25.50"), Ok(25.5));
        assert_eq!(parse_amount(".50"), Ok(0.5));
        assert_eq!(parse_amount("5."), Ok(5.0));
        assert_eq!(parse_amount("+5"), Ok(5.0));
        assert_eq!(parse_amount("-5.00"), Ok(-5.0));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
        assert_eq!(parse_amount("  10 "), Ok(10.0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount("abc"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("12.34.56"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount(""), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("1,000"), Err(ParseAmountError::InvalidFormat));
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert_eq!(parse_amount("inf"), Err(ParseAmountError::NotFinite));
        assert_eq!(parse_amount("-infinity"), Err(ParseAmountError::NotFinite));
        assert_eq!(parse_amount("NaN"), Err(ParseAmountError::NotFinite));
    }
}
