use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `duff_lib=trace`.
pub const LOG_ENV: &str = "DUFFMAN_LOG";

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    /// Installs the global subscriber once. Later calls are ignored.
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| {
            let filter = EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(debug)
                .try_init();
            Logger { debug }
        });
    }

    pub fn is_debug() -> bool {
        LOGGER.get().is_some_and(|l| l.debug)
    }
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}
