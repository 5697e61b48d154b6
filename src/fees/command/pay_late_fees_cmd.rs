use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::command::{Command, CommandError};
use crate::fees::domain::FeeService;
use crate::fees::domain::model::require_text;
use crate::fees::dto::PaymentOutcome;
use crate::gateway::payments::PaymentGateway;

pub struct PayLateFeesCommand {
    fee_service: Box<dyn FeeService>,
    payment_gateway: Arc<dyn PaymentGateway>,
}

impl PayLateFeesCommand {
    pub fn new(fee_service: Box<dyn FeeService>, payment_gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            fee_service,
            payment_gateway,
        }
    }
}

// identifiers stay untyped here so that non-text input is reported as invalid
// instead of failing deserialization
#[derive(Debug, Deserialize)]
pub struct PayLateFeesCommandRequest {
    #[serde(default)]
    patron_id: Value,
    #[serde(default)]
    book_id: Value,
}

impl PayLateFeesCommandRequest {
    pub fn new(patron_id: Value, book_id: Value) -> Self {
        Self {
            patron_id,
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct PayLateFeesCommandResponse {
    pub payment: PaymentOutcome,
}

impl PayLateFeesCommandResponse {
    pub fn new(payment: PaymentOutcome) -> Self {
        Self {
            payment,
        }
    }
}

#[async_trait]
impl Command<PayLateFeesCommandRequest, PayLateFeesCommandResponse> for PayLateFeesCommand {
    async fn execute(&self, req: PayLateFeesCommandRequest) -> Result<PayLateFeesCommandResponse, CommandError> {
        let patron_id = require_text("patron_id", &req.patron_id)?;
        let book_id = require_text("book_id", &req.book_id)?;
        self.fee_service.pay_late_fees(patron_id, book_id, self.payment_gateway.as_ref())
            .await.map_err(CommandError::from).map(PayLateFeesCommandResponse::new)
    }
}
