use serde_json::json;

use crate::logging::telemetry::CustomProperties;

const CONSOLE_TARGET: &str = "bookmark_service::console";

/// Console stream a [`LogSink`](crate::logging::LogSink) writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

pub trait ConsoleSink: Send + Sync {
    fn write(&self, level: ConsoleLevel, properties: &CustomProperties, message: &str);
}

/// Writes console records through the `log` facade.
///
/// Each record is a JSON object `{Tenant, App_Name, Message}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogConsole;

impl ConsoleSink for LogConsole {
    fn write(&self, level: ConsoleLevel, properties: &CustomProperties, message: &str) {
        let record = json!({
            "Tenant": properties.tenant,
            "App_Name": properties.app_name,
            "Message": message,
        });

        match level {
            ConsoleLevel::Log => log::info!(target: CONSOLE_TARGET, "{}", record),
            ConsoleLevel::Warn => log::warn!(target: CONSOLE_TARGET, "{}", record),
            ConsoleLevel::Error => log::error!(target: CONSOLE_TARGET, "{}", record),
        }
    }
}
