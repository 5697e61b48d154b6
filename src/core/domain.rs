use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest late-fee refund a single request may issue.
pub const MAX_REFUND: Decimal = dec!(15.00);

// Configuration abstracts config options for the late-fee payments
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_refund: Decimal,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_refund: MAX_REFUND,
        }
    }
}
