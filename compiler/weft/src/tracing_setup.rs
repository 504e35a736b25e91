//! Tracing subscriber installation.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Subscriber settings, normally read from the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives; tracing stays off when `None`.
    pub filter: Option<String>,
    /// Use the hierarchical `tracing-tree` layer instead of flat lines.
    pub tree: bool,
}

impl TracingConfig {
    /// Read `RUST_LOG` and `WEFT_LOG_TREE`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("WEFT_LOG_TREE").ok(),
        )
    }

    fn from_vars(filter: Option<String>, tree: Option<String>) -> Self {
        TracingConfig {
            filter: filter.filter(|f| !f.trim().is_empty()),
            tree: tree.as_deref().is_some_and(is_truthy),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.filter.is_some()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Initialize tracing from the environment.
///
/// Safe to call multiple times; only the first enabled call installs a
/// subscriber.
pub fn init_tracing() {
    init_tracing_with(&TracingConfig::from_env());
}

/// Initialize tracing with explicit settings.
pub fn init_tracing_with(config: &TracingConfig) {
    let Some(directives) = config.filter.as_deref() else {
        return;
    };

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::new(directives);
        let installed = if config.tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
        };

        // Another subscriber (e.g. a host application's) takes precedence.
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

#[cfg(test)]
mod tests;
