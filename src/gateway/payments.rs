use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::core::library::LibraryResult;

// ChargeRequest carries the named parameters of a late-fee charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub patron_id: String,
    pub book_id: String,
}

impl ChargeRequest {
    pub fn new(amount: Decimal, patron_id: &str, book_id: &str) -> Self {
        Self {
            amount,
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

/// Mapping returned by a payment gateway.
///
/// `status` is optional because gateways are free to omit it; every other key the
/// gateway sends is kept as-is in `fields`, so the response serializes back to exactly
/// what the gateway produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl GatewayResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// External payment processor that charges and refunds late fees.
///
/// Either call may fail with any [`crate::core::library::LibraryError`], conventionally
/// `LibraryError::Gateway` for processor faults (timeouts, declines at transport level).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Sync + Send {
    async fn process(&self, request: ChargeRequest) -> LibraryResult<GatewayResponse>;
    async fn refund(&self, transaction_id: &str, amount: Decimal) -> LibraryResult<GatewayResponse>;
}
