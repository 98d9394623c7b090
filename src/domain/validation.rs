use thiserror::Error;

use super::{Amount, parse_amount};

/// Reasons a typed amount/category pair is rejected before it reaches the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount cannot be empty")]
    EmptyAmount,

    #[error("category cannot be empty")]
    EmptyCategory,

    #[error("amount must be a valid number")]
    InvalidAmount,

    #[error("amount must be positive")]
    NonPositiveAmount,
}

/// Check raw user input for a new transaction.
///
/// Rules are applied in order and the first failure wins:
/// empty amount, empty category, unparseable amount, amount <= 0.
/// On success the parsed amount is returned so the caller does not parse twice.
/// The description is never validated.
pub fn validate(amount_text: &str, category_text: &str) -> Result<Amount, ValidationError> {
    if amount_text.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }
    if category_text.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    let amount = parse_amount(amount_text).map_err(|_| ValidationError::InvalidAmount)?;
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_amount() {
        assert_eq!(validate("", "Food"), Err(ValidationError::EmptyAmount));
    }

    #[test]
    fn test_empty_category() {
        assert_eq!(validate("10", ""), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(validate("abc", "Food"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate("inf", "Food"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate("nan", "Food"), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_non_positive_amount() {
        assert_eq!(validate("-5", "Food"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(validate("0", "Food"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(validate("-0.0", "Food"), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_valid_input() {
        assert_eq!(validate("25.50", "Rent"), Ok(25.5));
        assert_eq!(validate("0.01", "Coffee"), Ok(0.01));
    }

    #[test]
    fn test_rule_order() {
        // Both empty: amount is reported first
        assert_eq!(validate("", ""), Err(ValidationError::EmptyAmount));
        // Bad number and empty category: category is reported first
        assert_eq!(validate("abc", ""), Err(ValidationError::EmptyCategory));
        // Negative and empty category: category is reported first
        assert_eq!(validate("-5", ""), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        // Only the empty string counts as empty; blanks fall through to parsing
        assert_eq!(validate(" ", "Food"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate("10", " "), Ok(10.0));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::EmptyAmount.to_string(),
            "amount cannot be empty"
        );
        assert_eq!(
            ValidationError::EmptyCategory.to_string(),
            "category cannot be empty"
        );
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "amount must be a valid number"
        );
        assert_eq!(
            ValidationError::NonPositiveAmount.to_string(),
            "amount must be positive"
        );
    }
}
