//! Tracing setup for the `tsq` binary.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Install a subscriber.
///
/// With `TSQ_LOG_TREE` set, events render as an indented tree on stderr,
/// filtered by `RUST_LOG` (default `debug`). Otherwise this defers to
/// [`tsq_lexer::init_tracing`], which stays silent unless `RUST_LOG` is set.
pub fn setup_tracing() {
    if std::env::var_os("TSQ_LOG_TREE").is_none() {
        tsq_lexer::init_tracing();
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_tree::HierarchicalLayer::default()
                .with_indent_lines(true)
                .with_indent_amount(2)
                .with_bracketed_fields(true)
                .with_targets(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
