pub mod books;
pub mod core;
pub mod fees;
pub mod gateway;
pub mod utils;
