//! Data ingestion layer for ToastMetrics.
//!
//! Responsible for discovering weekly menu-breakdown CSV exports, parsing and
//! normalizing them into one unified sales table, and computing the ranked
//! item aggregates the reports are built from.

pub mod aggregator;
pub mod assembler;
pub mod discovery;
pub mod normalizer;

pub use metrics_core as core;
