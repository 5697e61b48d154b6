use std::str::FromStr;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use crate::core::library::{LibraryError, LibraryResult};

/// Rejects an identifier that is empty.
pub fn validate_identifier(name: &str, value: &str) -> LibraryResult<()> {
    if value.is_empty() {
        return Err(LibraryError::validation(format!("Invalid {}", name).as_str(), Some("400".to_string())));
    }
    Ok(())
}

/// Extracts a non-empty text identifier from a loosely typed request value.
///
/// Anything other than a JSON string (null, numbers, objects, ...) is not text and is
/// rejected the same way an empty string is.
pub fn require_text<'a>(name: &str, value: &'a Value) -> LibraryResult<&'a str> {
    match value.as_str() {
        Some(text) => {
            validate_identifier(name, text)?;
            Ok(text)
        }
        None => Err(LibraryError::validation(format!("Invalid {}", name).as_str(), Some("400".to_string()))),
    }
}

/// Coerces a request value into a decimal amount. JSON numbers and numeric strings are
/// accepted.
pub fn coerce_amount(name: &str, value: &Value) -> LibraryResult<Decimal> {
    let parsed = match value {
        Value::Number(n) => decimal_from_number(n),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    };
    parsed.ok_or_else(|| LibraryError::validation(
        format!("{} must be numeric", name).as_str(), Some("400".to_string())))
}

fn decimal_from_number(n: &Number) -> Option<Decimal> {
    parse_decimal(n.to_string().as_str())
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)).ok()
}

// FeeAmount is the late fee owed by a patron, never negative; zero means nothing is owed
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FeeAmount(Decimal);

impl FeeAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_chargeable(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl From<Decimal> for FeeAmount {
    // calculators may report a credit as a negative fee, that is still nothing to charge
    fn from(calculated: Decimal) -> Self {
        if calculated > Decimal::ZERO {
            Self(calculated)
        } else {
            Self::ZERO
        }
    }
}

// RefundAmount is a positive amount no larger than the configured refund cap
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RefundAmount(Decimal);

impl RefundAmount {
    pub fn new(value: Decimal, max_refund: Decimal) -> LibraryResult<Self> {
        if value <= Decimal::ZERO {
            return Err(LibraryError::validation(
                "Refund amount must be greater than zero", Some("400".to_string())));
        }
        if value > max_refund {
            return Err(LibraryError::validation(
                format!("Refund amount exceeds {} maximum", max_refund).as_str(), Some("400".to_string())));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use crate::core::library::LibraryError;
    use crate::fees::domain::model::{coerce_amount, require_text, validate_identifier, FeeAmount, RefundAmount};

    #[tokio::test]
    async fn test_should_reject_empty_identifier() {
        assert!(validate_identifier("patron_id", "P1").is_ok());
        assert!(matches!(validate_identifier("patron_id", ""), Err(LibraryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_require_text_identifier() {
        assert_eq!("B1", require_text("book_id", &json!("B1")).expect("should accept text"));
        for bad in [Value::Null, json!(""), json!(42), json!(true), json!(["B1"]), json!({"id": "B1"})] {
            assert!(matches!(require_text("book_id", &bad), Err(LibraryError::Validation { .. })), "{:?}", bad);
        }
    }

    #[tokio::test]
    async fn test_should_coerce_numeric_amounts() {
        assert_eq!(dec!(5.00), coerce_amount("amount", &json!(5.0)).expect("float"));
        assert_eq!(dec!(5), coerce_amount("amount", &json!(5)).expect("integer"));
        assert_eq!(dec!(7.25), coerce_amount("amount", &json!("7.25")).expect("numeric string"));
        assert_eq!(dec!(-1), coerce_amount("amount", &json!(-1.0)).expect("negative"));
    }

    #[tokio::test]
    async fn test_should_reject_non_numeric_amounts() {
        for bad in [Value::Null, json!("abc"), json!(""), json!(true), json!([5.0])] {
            assert!(matches!(coerce_amount("amount", &bad), Err(LibraryError::Validation { .. })), "{:?}", bad);
        }
    }

    #[tokio::test]
    async fn test_should_clamp_fee_amount() {
        assert!(FeeAmount::from(dec!(7.50)).is_chargeable());
        assert_eq!(dec!(7.50), FeeAmount::from(dec!(7.50)).value());
        assert_eq!(FeeAmount::ZERO, FeeAmount::from(dec!(0.0)));
        assert_eq!(FeeAmount::ZERO, FeeAmount::from(dec!(-2.00)));
        assert!(!FeeAmount::ZERO.is_chargeable());
    }

    #[tokio::test]
    async fn test_should_bound_refund_amount() {
        let max = dec!(15.00);
        assert_eq!(dec!(5.00), RefundAmount::new(dec!(5.00), max).expect("in range").value());
        assert!(RefundAmount::new(dec!(15.00), max).is_ok());
        assert!(RefundAmount::new(dec!(0.01), max).is_ok());
        for bad in [dec!(0.0), dec!(-1.0), dec!(15.01), dec!(16.0)] {
            assert!(matches!(RefundAmount::new(bad, max), Err(LibraryError::Validation { .. })), "{}", bad);
        }
    }

    #[tokio::test]
    async fn test_should_explain_refund_cap() {
        let err = RefundAmount::new(dec!(16.0), dec!(15.00)).expect_err("over the cap");
        assert!(err.to_string().contains("exceeds 15.00 maximum"));
    }
}
