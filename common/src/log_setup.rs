use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static TEST_LOG_INIT: OnceLock<()> = OnceLock::new();

fn env_filter(base_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .unwrap_or_else(|e| panic!("Invalid log filter: {}", e))
}

/// Install the global console subscriber.
///
/// `RUST_LOG` overrides `base_level`. Warnings and errors go to stderr,
/// everything else to stdout. Panics if a global subscriber is already set.
pub fn setup_logging(base_level: &str) {
    let console_writer = std::io::stdout.and(std::io::stderr.with_min_level(Level::WARN));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .with_writer(console_writer);

    tracing_subscriber::registry()
        .with(env_filter(base_level))
        .with(console_layer)
        .try_init()
        .unwrap_or_else(|e| panic!("Logger initialization failed: {}", e));
}

/// Install a test-captured subscriber once per process. Safe to call from every test.
pub fn setup_test_logging() {
    TEST_LOG_INIT.get_or_init(|| {
        let test_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_test_writer();

        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(env_filter("debug"))
            .with(test_layer)
            .try_init();
    });
}
