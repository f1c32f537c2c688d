/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Reads the log level from the `LOGLEVEL` environment variable
///
/// Accepts `DEBUG`, `INFO`, `WARN`, `ERROR` and `TRACE` in any case. Anything
/// else, or an unset variable, yields `INFO`.
pub fn log_level_from_env() -> Level {
    parse_log_level(env::var("LOGLEVEL").ok().as_deref())
}

/// Maps a textual log level to a [`Level`], defaulting to `INFO`
pub fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_uppercase()).as_deref() {
        Some("DEBUG") => Level::DEBUG,
        Some("ERROR") => Level::ERROR,
        Some("WARN") => Level::WARN,
        Some("TRACE") => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Sets up the global tracing subscriber
///
/// Safe to call more than once; only the first call installs the subscriber.
/// When `RUST_LOG` is set it takes precedence over `LOGLEVEL`, which makes it
/// possible to quiet down noisy dependencies such as `hyper`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from_env();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_line_number(true)
            .with_file(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // Another subscriber (e.g. a test harness) got there first
            tracing::debug!("Global tracing subscriber already set");
        }
    });
}
