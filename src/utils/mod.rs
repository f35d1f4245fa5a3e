//! Utility module for logging and shared helpers

pub mod logging;

pub use logging::{init_logging, LogConfig, LogLevel};
