//! # dynval-log
//!
//! Subscriber setup for the `tracing` events emitted by `dynval-value` and the
//! `dynval` binary.
//!
//! ```rust,no_run
//! use dynval_log::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     let _guard = dynval_log::auto_init()?;
//!     info!(kind = "utf8", "decoded value");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Format, LogError, LogResult, LoggerGuard, auto_init, debug, error, info, init,
        init_with, trace, warn,
    };
    pub use tracing::{Level, Span, field, instrument, span};
}

pub use tracing::{debug, error, info, trace, warn};

/// Pick a configuration from the environment and install it.
///
/// `DYNVAL_LOG` or `RUST_LOG` selects [`Config::from_env`]; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    #[cfg(test)]
    {
        if tracing::dispatcher::has_been_set() {
            return Ok(LoggerGuard::noop());
        }
    }

    if std::env::var_os("DYNVAL_LOG").is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with the default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with a custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests; losing the install race to another test is fine
#[cfg(test)]
pub(crate) fn init_test() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    match init_with(Config::test()) {
        Err(LogError::Init(_)) => Ok(LoggerGuard::noop()),
        other => other,
    }
}
