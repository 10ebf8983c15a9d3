#![deny(missing_docs)]
//! Logging macros for the CutURL crates.
//!
//! `cuturl_engine` logs requests and storage failures through these macros and
//! `cuturl_app` logs effect outcomes; the binary installs the simplelog backend
//! at startup. Reducer tests in `cuturl_core` only need [`initialize_for_tests`].

#[doc(hidden)]
pub use log as __log;

/// Trace-level log line, e.g. per-request HTTP detail.
#[macro_export]
macro_rules! cut_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Debug-level log line, e.g. clipboard tool probing.
#[macro_export]
macro_rules! cut_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Info-level log line for completed shortenings and startup.
#[macro_export]
macro_rules! cut_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Warn-level log line for recoverable failures such as a corrupt history snapshot.
#[macro_export]
macro_rules! cut_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Error-level log line for failures the user never sees, such as a failed history save.
#[macro_export]
macro_rules! cut_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Installs a terminal logger so test runs show engine and app log lines.
///
/// Later calls are ignored once any logger is installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
