/// Application Insights telemetry client.
pub mod appinsights;
/// Console output stream.
pub mod console;
pub mod entry;
/// Error classification and forwarding.
pub mod exception;
/// Leveled dispatch to subscribed listeners.
pub mod logger;
/// Console and telemetry fan-out listener.
pub mod sink;
/// Telemetry client abstraction and shared metadata.
pub mod telemetry;

pub use appinsights::AppInsightsClient;
pub use console::{ConsoleLevel, ConsoleSink, LogConsole};
pub use entry::LogEntry;
pub use exception::ExceptionReporter;
pub use logger::{LogListener, Logger};
pub use sink::LogSink;
pub use telemetry::{CustomProperties, SeverityLevel, TelemetryClient};
