use std::sync::Arc;

use crate::logging::console::{ConsoleLevel, ConsoleSink, LogConsole};
use crate::logging::entry::LogEntry;
use crate::logging::logger::LogListener;
use crate::logging::telemetry::{CustomProperties, SeverityLevel, TelemetryClient};
use crate::LogLevel;

/// Fans log entries out to the console and to remote telemetry.
///
/// | level   | console | telemetry                    |
/// |---------|---------|------------------------------|
/// | Off     | -       | -                            |
/// | Verbose | -       | trace, `Verbose`             |
/// | Info    | log     | trace, `Information`         |
/// | Warning | warn    | trace, `Warning`             |
/// | Error   | error   | exception, `Error`           |
pub struct LogSink {
    console: Arc<dyn ConsoleSink>,
    telemetry: Arc<dyn TelemetryClient>,
    properties: CustomProperties,
}

impl LogSink {
    pub fn new(
        console: Arc<dyn ConsoleSink>,
        telemetry: Arc<dyn TelemetryClient>,
        properties: CustomProperties,
    ) -> Self {
        Self {
            console,
            telemetry,
            properties,
        }
    }

    /// Sink writing console records through the `log` facade.
    pub fn with_log_console(
        telemetry: Arc<dyn TelemetryClient>,
        properties: CustomProperties,
    ) -> Self {
        Self::new(Arc::new(LogConsole), telemetry, properties)
    }

    pub fn properties(&self) -> &CustomProperties {
        &self.properties
    }

    pub fn dispatch(&self, entry: &LogEntry) {
        if entry.level == LogLevel::Off {
            return;
        }

        let msg = entry.formatted_message();
        let props = &self.properties;

        match entry.level {
            LogLevel::Verbose => {
                self.telemetry.track_trace(&msg, SeverityLevel::Verbose, props);
            }
            LogLevel::Info => {
                self.console.write(ConsoleLevel::Log, props, &msg);
                self.telemetry.track_trace(&msg, SeverityLevel::Information, props);
            }
            LogLevel::Warning => {
                self.console.write(ConsoleLevel::Warn, props, &msg);
                self.telemetry.track_trace(&msg, SeverityLevel::Warning, props);
            }
            LogLevel::Error => {
                self.console.write(ConsoleLevel::Error, props, &msg);
                self.telemetry.track_exception(&msg, SeverityLevel::Error, props);
            }
            LogLevel::Off => {}
        }
    }

    /// Record a named event, independent of leveled logging.
    pub fn track_event(&self, name: &str) {
        self.telemetry.track_event(name, &self.properties);
    }
}

impl LogListener for LogSink {
    fn log(&self, entry: &LogEntry) {
        self.dispatch(entry);
    }
}
