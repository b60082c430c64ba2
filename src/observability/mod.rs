//! Observability infrastructure for the Slack client.
//!
//! Provides debug sinks and logging utilities.

pub mod logging;

pub use logging::*;
