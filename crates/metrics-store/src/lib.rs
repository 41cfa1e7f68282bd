//! SQLite persistence and ad-hoc query layer for ToastMetrics.
//!
//! The unified sales table is written to a single `sales` table with
//! full-replace semantics; reads go through an arbitrary-SQL, read-only
//! query path for ad-hoc reporting.

pub mod store;

pub use store::{QueryResult, SalesStore};

pub use metrics_core as core;
