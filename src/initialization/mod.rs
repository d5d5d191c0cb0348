//! Startup wiring: logger setup.

mod logger;

pub use logger::init_logger_with;
