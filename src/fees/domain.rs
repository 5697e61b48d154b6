pub mod model;
pub mod service;

use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::core::library::LibraryResult;
use crate::fees::dto::PaymentOutcome;
use crate::gateway::payments::{GatewayResponse, PaymentGateway};

/// Computes the late fee a patron owes for a book.
///
/// Supplied by the hosting service; there is no built-in fee schedule.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeeCalculator: Sync + Send {
    async fn calculate_late_fee(&self, patron_id: &str, book_id: &str) -> LibraryResult<Decimal>;
}

#[async_trait]
pub trait FeeService: Sync + Send {
    // Charges the late fee owed for a book. Gateway faults become an error outcome.
    async fn pay_late_fees(&self, patron_id: &str, book_id: &str,
                           gateway: &dyn PaymentGateway) -> LibraryResult<PaymentOutcome>;
    // Refunds part or all of a late-fee payment. Gateway faults reach the caller.
    async fn refund_late_fee_payment(&self, transaction_id: &str, amount: Decimal,
                                     gateway: &dyn PaymentGateway) -> LibraryResult<GatewayResponse>;
}
