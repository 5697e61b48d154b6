use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::gateway::payments::GatewayResponse;

pub const STATUS_NO_FEE: &str = "no_fee";
pub const STATUS_ERROR: &str = "error";
pub const STATUS_UNKNOWN: &str = "unknown";

// PaymentOutcome is the uniform result of a late-fee charge attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentOutcome {
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PaymentOutcome {
    pub fn no_fee() -> Self {
        Self {
            status: STATUS_NO_FEE.to_string(),
            amount: Decimal::ZERO,
            error: None,
            fields: Map::new(),
        }
    }

    pub fn failed(amount: Decimal, error: String) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            amount,
            error: Some(error),
            fields: Map::new(),
        }
    }

    // Gateway fields are carried over as-is, except `amount` which always stays the
    // fee that was charged.
    pub fn from_gateway(amount: Decimal, res: GatewayResponse) -> Self {
        let mut fields = res.fields;
        fields.remove("amount");
        let loose_status = fields.remove("status").and_then(|v| v.as_str().map(str::to_string));
        Self {
            status: res.status.or(loose_status).unwrap_or_else(|| STATUS_UNKNOWN.to_string()),
            amount,
            error: None,
            fields,
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use crate::fees::dto::PaymentOutcome;
    use crate::gateway::payments::GatewayResponse;

    #[tokio::test]
    async fn test_should_serialize_no_fee() {
        let outcome = PaymentOutcome::no_fee();
        assert_eq!(json!({"status": "no_fee", "amount": 0.0}), serde_json::to_value(&outcome).expect("serialize"));
    }

    #[tokio::test]
    async fn test_should_serialize_failure() {
        let outcome = PaymentOutcome::failed(dec!(4.25), "timeout".to_string());
        assert_eq!(json!({"status": "error", "amount": 4.25, "error": "timeout"}),
                   serde_json::to_value(&outcome).expect("serialize"));
    }

    #[tokio::test]
    async fn test_should_merge_gateway_fields() {
        let res = GatewayResponse::new("success")
            .with_field("transaction_id", "tx_123")
            .with_field("amount", 99.0);
        let outcome = PaymentOutcome::from_gateway(dec!(7.50), res);
        assert_eq!(json!({"status": "success", "amount": 7.5, "transaction_id": "tx_123"}),
                   serde_json::to_value(&outcome).expect("serialize"));
    }

    #[tokio::test]
    async fn test_should_default_unknown_status() {
        let outcome = PaymentOutcome::from_gateway(dec!(2.5), GatewayResponse::default());
        assert_eq!("unknown", outcome.status.as_str());
        assert_eq!(dec!(2.5), outcome.amount);
    }
}
