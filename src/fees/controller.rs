use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::fees::command::pay_late_fees_cmd::{PayLateFeesCommand, PayLateFeesCommandRequest, PayLateFeesCommandResponse};
use crate::fees::command::refund_late_fee_cmd::{RefundLateFeeCommand, RefundLateFeeCommandRequest, RefundLateFeeCommandResponse};
use crate::fees::domain::FeeService;
use crate::fees::factory;

fn build_service(state: &AppState) -> Box<dyn FeeService> {
    factory::create_fee_service(&state.config, state.book_lookup.clone(), state.fee_calculator.clone())
}

pub async fn pay_late_fees(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<PayLateFeesCommandResponse>, ServerError> {
    let req: PayLateFeesCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = PayLateFeesCommand::new(svc, state.payment_gateway.clone()).execute(req).await?;
    Ok(Json(res))
}

pub async fn refund_late_fee_payment(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RefundLateFeeCommandResponse>, ServerError> {
    let req: RefundLateFeeCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = RefundLateFeeCommand::new(svc, state.payment_gateway.clone()).execute(req).await?;
    Ok(Json(res))
}

/// Routes for the late-fee endpoints, ready to be merged into the host's router.
pub fn fee_routes(state: AppState) -> Router {
    Router::new()
        .route("/fees/pay", post(pay_late_fees))
        .route("/fees/refund", post(refund_late_fee_payment))
        .with_state(state)
}
