//! Common utilities for the rbt type checker.
//!
//! This crate provides the ambient pieces shared by all rbt crates:
//! - Centralized limits and capacity hints
//! - Tracing subscriber setup driven by environment variables

// Centralized limits and thresholds
pub mod limits;

// Tracing subscriber setup (RBT_LOG / RBT_LOG_FORMAT)
pub mod tracing_config;
pub use tracing_config::{LogFormat, init_tracing};
