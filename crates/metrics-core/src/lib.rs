//! Shared core for ToastMetrics.
//!
//! Holds the named-column sales table model, the error taxonomy, the run
//! configuration and the number formatting used by the report output.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{MetricsError, Result};
