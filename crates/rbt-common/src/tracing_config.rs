//! Opt-in subscriber for the `rbt_types` events.
//!
//! The library crates only emit events; nothing is printed until a binary or
//! test target calls [`init_tracing`]. In this workspace that is the
//! `scenarios` integration target and the `type_ptr_bench` criterion bench.
//!
//! Events worth filtering for:
//!
//! | target                   | level   | emitted when                                   |
//! |--------------------------|---------|------------------------------------------------|
//! | `rbt_types::type_ptr`    | `trace` | `is_fully_defined` reaches a placeholder       |
//! | `rbt_types::release`     | `trace` | one drop dismantles a large nested payload     |
//! | `rbt_types::type_factory`| `debug` | `try_shape` rejects mismatched keys and values |
//!
//! `RBT_LOG` takes an `EnvFilter` directive such as `rbt_types::release=trace`
//! and wins over `RUST_LOG`. With neither set, [`init_tracing`] returns early
//! and installs nothing. `RBT_LOG_FORMAT` picks the layer: `tree` for
//! `tracing-tree` indentation, `json` for machine-readable lines, anything
//! else for plain `fmt` text. Every format writes to stderr so bench and test
//! output on stdout stays clean.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read the format from the `RBT_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("RBT_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `RBT_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("RBT_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `RBT_LOG` nor `RUST_LOG` is set. Returns `true`
/// when a subscriber was installed by this call; a second call (or a
/// subscriber installed elsewhere, e.g. by a test harness) yields `false`.
///
/// All output goes to stderr.
pub fn init_tracing() -> bool {
    let has_rbt_log = std::env::var("RBT_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_rbt_log && !has_rust_log {
        return false;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
