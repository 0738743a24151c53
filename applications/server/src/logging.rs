//! Process-wide logger
//!
//! [`logger`] hands out the single shared [`Logger`]. The first call installs
//! one `tracing` sink that writes `timestamp - LEVEL - message` lines to
//! stderr; every later call returns the same handle without touching the
//! subscriber again.

use chrono::Utc;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{
        format::{FormatEvent, FormatFields, Writer},
        FmtContext,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "connectly_server=info,connectly_storage=info,tower_http=info";

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared logger, configured on first access
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| {
        let logger = Logger {
            sinks: AtomicUsize::new(0),
        };
        logger.attach_sink();
        logger
    })
}

/// Handle to the process-wide log sink
#[derive(Debug)]
pub struct Logger {
    sinks: AtomicUsize,
}

impl Logger {
    /// Number of output sinks this logger has installed (0 or 1)
    pub fn sink_count(&self) -> usize {
        self.sinks.load(Ordering::SeqCst)
    }

    pub fn info(&self, message: impl fmt::Display) {
        tracing::info!(target: "connectly_server", "{message}");
    }

    pub fn warn(&self, message: impl fmt::Display) {
        tracing::warn!(target: "connectly_server", "{message}");
    }

    fn attach_sink(&self) {
        if self.sink_count() > 0 {
            return;
        }

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().event_format(LineFormat))
            .try_init();

        match installed {
            Ok(()) => {
                self.sinks.fetch_add(1, Ordering::SeqCst);
            }
            // Someone else owns the global subscriber; leave it alone.
            Err(e) => tracing::debug!("Log sink not installed: {}", e),
        }
    }
}

/// `2025-01-05 12:00:00,123 - INFO - message`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Utc::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
