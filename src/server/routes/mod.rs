//! Request handlers, one module per endpoint

pub mod disease;
pub mod health;
pub mod recommendations;
pub mod yield_prediction;
