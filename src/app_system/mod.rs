//! System orchestration: configuration, tracing, and the fetch-then-report run.

pub mod report_system;
pub mod telemetry;
pub mod config;
pub mod error;

pub use report_system::*;
pub use telemetry::*;
pub use config::*;
pub use error::*;
