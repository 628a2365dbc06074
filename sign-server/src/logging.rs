//! Logging setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber.
///
/// `RUST_LOG` overrides the filter; otherwise `default_level` applies to
/// this crate and `warn` to everything else.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(default_level)));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // A subscriber may already be set (e.g. in tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

fn default_filter(level: &str) -> String {
    format!("warn,sign_server={level},tower_http={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            let directives = default_filter(level);
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn init_twice_is_harmless() {
        init("info");
        init("debug");
    }
}
