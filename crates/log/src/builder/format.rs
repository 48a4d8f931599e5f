//! Format layer creation

use tracing::Subscriber;
use tracing_subscriber::{Layer, fmt, registry::LookupSpan};

use crate::{DisplayConfig, Format};

/// Boxed fmt layer for the requested format; output goes to stderr.
pub(super) fn fmt_layer<S>(
    format: Format,
    display: &DisplayConfig,
) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    macro_rules! configure {
        ($layer:expr) => {{
            let layer = $layer
                .with_writer(std::io::stderr)
                .with_ansi(display.colors)
                .with_target(display.target)
                .with_file(display.source)
                .with_line_number(display.source)
                .with_thread_ids(display.thread_ids)
                .with_thread_names(display.thread_names);
            if display.time {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }};
    }

    match format {
        Format::Compact => configure!(fmt::layer().compact()),
        Format::Pretty => configure!(fmt::layer().pretty()),
        Format::Json => configure!(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(display.span_list)
                .flatten_event(display.flatten)
        ),
    }
}
