use std::sync::Arc;
use axum::http::StatusCode;
use crate::books::domain::BookLookup;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::fees::domain::FeeCalculator;
use crate::gateway::payments::PaymentGateway;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub book_lookup: Arc<dyn BookLookup>,
    pub fee_calculator: Arc<dyn FeeCalculator>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    pub fn new(branch: &str, book_lookup: Arc<dyn BookLookup>, fee_calculator: Arc<dyn FeeCalculator>,
               payment_gateway: Arc<dyn PaymentGateway>) -> AppState {
        AppState {
            config: Configuration::new(branch),
            book_lookup,
            fee_calculator,
            payment_gateway,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Gateway { .. } => {
                (StatusCode::BAD_GATEWAY, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let cases = vec![
            (CommandError::Validation { message: "bad".to_string(), reason_code: None }, StatusCode::BAD_REQUEST),
            (CommandError::NotFound { message: "missing".to_string() }, StatusCode::NOT_FOUND),
            (CommandError::Gateway { message: "down".to_string(), reason_code: None, retryable: true }, StatusCode::BAD_GATEWAY),
            (CommandError::Database { message: "db".to_string(), reason_code: None, retryable: false }, StatusCode::INTERNAL_SERVER_ERROR),
            (CommandError::Serialization { message: "json".to_string() }, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            let (code, _): ServerError = err.into();
            assert_eq!(status, code);
        }
    }
}
