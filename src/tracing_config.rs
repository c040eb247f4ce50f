//! Tracing configuration for the `tsemit` binary.
//!
//! Output format is chosen with `TSEMIT_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: hierarchical output via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! TSEMIT_LOG=debug tsemit tree.json
//! TSEMIT_LOG="tsemit_writer=debug" TSEMIT_LOG_FORMAT=tree tsemit tree.json
//! ```
//!
//! Nothing is installed unless `TSEMIT_LOG` (or `RUST_LOG`) is set. All
//! output goes to stderr; stdout carries only rendered text.

use std::str::FromStr;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "TSEMIT_LOG";
pub const LOG_FORMAT_ENV: &str = "TSEMIT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        })
    }
}

/// Filter directives and output format resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub directives: String,
    pub format: LogFormat,
}

impl TracingConfig {
    /// `TSEMIT_LOG` wins over `RUST_LOG`. Returns `None` when neither is set.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    pub fn from_vars(
        tsemit_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = tsemit_log.or(rust_log)?;
        let format = format
            .as_deref()
            .map(|value| value.parse().unwrap_or_default())
            .unwrap_or_default();
        Some(TracingConfig { directives, format })
    }

    /// Install the global subscriber. Fails if one is already installed.
    pub fn try_init(self) -> Result<(), tracing_subscriber::util::TryInitError> {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);

        match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_writer(std::io::stderr)
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).try_init()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init()
            }
            LogFormat::Text => {
                let text_layer = fmt::layer().with_writer(std::io::stderr);
                Registry::default().with(filter).with(text_layer).try_init()
            }
        }
    }
}

/// Initialise tracing from the environment; a no-op when logging is not
/// requested or a subscriber is already installed.
pub fn init_tracing() {
    if let Some(config) = TracingConfig::from_env() {
        let _ = config.try_init();
    }
}
