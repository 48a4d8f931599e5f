//! Logger builder

mod format;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Config, LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the root span entered.
///
/// Drop it at the end of `main`; the subscriber itself stays installed.
#[derive(Debug)]
pub struct LoggerGuard {
    #[allow(dead_code)]
    root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse the filter directive without installing anything
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(self.config.level.clone(), e))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the filter directive cannot be parsed
    /// - a global subscriber is already set
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let fmt_layer = format::fmt_layer(self.config.format, &self.config.display);

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        Ok(LoggerGuard { root_span })
    }
}

impl LoggerGuard {
    #[cfg(test)]
    pub(crate) fn noop() -> Self {
        Self { root_span: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Format;

    #[test]
    fn test_invalid_filter_is_rejected_before_install() {
        let builder =
            LoggerBuilder::from_config(Config::default().with_level("dynval_value=verbose"));
        let err = builder.build().unwrap_err();
        assert_eq!(err.code(), "LOG_FILTER");
    }

    #[test]
    fn test_filter_accepts_directives() {
        let builder = LoggerBuilder::from_config(
            Config::default()
                .with_level("dynval_value=trace,warn")
                .with_format(Format::Json),
        );
        assert!(builder.filter().is_ok());
    }
}
