use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::command::{Command, CommandError};
use crate::fees::domain::FeeService;
use crate::fees::domain::model::{coerce_amount, require_text};
use crate::gateway::payments::{GatewayResponse, PaymentGateway};

pub struct RefundLateFeeCommand {
    fee_service: Box<dyn FeeService>,
    payment_gateway: Arc<dyn PaymentGateway>,
}

impl RefundLateFeeCommand {
    pub fn new(fee_service: Box<dyn FeeService>, payment_gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            fee_service,
            payment_gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RefundLateFeeCommandRequest {
    #[serde(default)]
    transaction_id: Value,
    #[serde(default)]
    amount: Value,
}

impl RefundLateFeeCommandRequest {
    pub fn new(transaction_id: Value, amount: Value) -> Self {
        Self {
            transaction_id,
            amount,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RefundLateFeeCommandResponse {
    pub refund: GatewayResponse,
}

impl RefundLateFeeCommandResponse {
    pub fn new(refund: GatewayResponse) -> Self {
        Self {
            refund,
        }
    }
}

#[async_trait]
impl Command<RefundLateFeeCommandRequest, RefundLateFeeCommandResponse> for RefundLateFeeCommand {
    async fn execute(&self, req: RefundLateFeeCommandRequest) -> Result<RefundLateFeeCommandResponse, CommandError> {
        let transaction_id = require_text("transaction_id", &req.transaction_id)?;
        let amount = coerce_amount("amount", &req.amount)?;
        self.fee_service.refund_late_fee_payment(transaction_id, amount, self.payment_gateway.as_ref())
            .await.map_err(CommandError::from).map(RefundLateFeeCommandResponse::new)
    }
}
