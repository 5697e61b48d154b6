use std::sync::Arc;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use crate::books::domain::BookLookup;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::fees::domain::{FeeCalculator, FeeService};
use crate::fees::domain::model::{validate_identifier, FeeAmount, RefundAmount};
use crate::fees::dto::PaymentOutcome;
use crate::gateway::payments::{ChargeRequest, GatewayResponse, PaymentGateway};

pub struct FeeServiceImpl {
    branch_id: String,
    max_refund: Decimal,
    book_lookup: Arc<dyn BookLookup>,
    fee_calculator: Arc<dyn FeeCalculator>,
}

impl FeeServiceImpl {
    pub fn new(config: &Configuration, book_lookup: Arc<dyn BookLookup>,
               fee_calculator: Arc<dyn FeeCalculator>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_refund: config.max_refund,
            book_lookup,
            fee_calculator,
        }
    }
}

#[async_trait]
impl FeeService for FeeServiceImpl {
    async fn pay_late_fees(&self, patron_id: &str, book_id: &str,
                           gateway: &dyn PaymentGateway) -> LibraryResult<PaymentOutcome> {
        validate_identifier("patron_id", patron_id)?;
        validate_identifier("book_id", book_id)?;

        // existence check only, the record itself is not needed
        let _ = self.book_lookup.find_book_by_id(book_id).await?;

        let fee = FeeAmount::from(self.fee_calculator.calculate_late_fee(patron_id, book_id).await?);
        if !fee.is_chargeable() {
            debug!(branch_id = %self.branch_id, patron_id, book_id, "no late fee owed");
            return Ok(PaymentOutcome::no_fee());
        }

        let amount = fee.value();
        match gateway.process(ChargeRequest::new(amount, patron_id, book_id)).await {
            Ok(res) => {
                let outcome = PaymentOutcome::from_gateway(amount, res);
                info!(branch_id = %self.branch_id, patron_id, book_id, %amount,
                    status = %outcome.status, "late fee charged");
                Ok(outcome)
            }
            Err(err) => {
                warn!(branch_id = %self.branch_id, patron_id, book_id, %amount,
                    error = %err, "late fee charge failed");
                Ok(PaymentOutcome::failed(amount, err.to_string()))
            }
        }
    }

    async fn refund_late_fee_payment(&self, transaction_id: &str, amount: Decimal,
                                     gateway: &dyn PaymentGateway) -> LibraryResult<GatewayResponse> {
        validate_identifier("transaction_id", transaction_id)?;
        let refund = RefundAmount::new(amount, self.max_refund)?;

        let res = gateway.refund(transaction_id, refund.value()).await?;
        info!(branch_id = %self.branch_id, transaction_id, amount = %refund.value(),
            status = ?res.status, "late fee refunded");
        Ok(res)
    }
}
