/// Azure AD client handles and token acquisition.
pub mod auth;
/// Bookmark model and REST client.
pub mod bookmarks;
/// Application settings loaded from `appSettings.json`.
pub mod config;
/// Start-up wiring of telemetry, logging and token acquisition.
pub mod context;
/// Error type shared by every component.
pub mod error;
/// Leveled logging, exception reporting and telemetry fan-out.
pub mod logging;

pub use error::ServiceError;

/// Severity of a log entry.
///
/// Variants are ordered by severity; `Off` sorts last so an active level of
/// `Off` filters everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic output, sent to telemetry only.
    Verbose,
    /// Standard informational output.
    Info,
    /// Something unexpected that did not fail the operation.
    Warning,
    /// A failed operation.
    Error,
    /// Never dispatched.
    Off,
}

impl Default for LogLevel {
    /// Defaults to `Info` logging.
    fn default() -> Self {
        LogLevel::Info
    }
}
