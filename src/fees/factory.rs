use std::sync::Arc;
use crate::books::domain::BookLookup;
use crate::core::domain::Configuration;
use crate::fees::domain::{FeeCalculator, FeeService};
use crate::fees::domain::service::FeeServiceImpl;

pub fn create_fee_service(config: &Configuration, book_lookup: Arc<dyn BookLookup>,
                          fee_calculator: Arc<dyn FeeCalculator>) -> Box<dyn FeeService> {
    Box::new(FeeServiceImpl::new(config, book_lookup, fee_calculator))
}
