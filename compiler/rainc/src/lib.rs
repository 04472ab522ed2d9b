//! Rain compiler driver.
//!
//! Loads a file, runs the lexer or the expression parser over it, and
//! reports diagnostics on stderr. The `rain` binary is a thin argument
//! parser over [`commands`].

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `RAIN_LOG` is an `EnvFilter` directive (default `warn`). When
/// `RAIN_LOG_TREE` is set, events are shown as an indented span tree
/// instead of flat lines. Later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("RAIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os("RAIN_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            let _ = registry.with(tree).try_init();
        } else {
            let flat = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr);
            let _ = registry.with(flat).try_init();
        }
    });
}
