use std::sync::{Arc, RwLock};

use crate::error::ServiceError;
use crate::logging::entry::LogEntry;
use crate::LogLevel;

/// Receives every entry the [`Logger`] lets through.
pub trait LogListener: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// Dispatches log entries to subscribed listeners.
///
/// Entries at `Off` or below the active level are dropped.
pub struct Logger {
    active_level: LogLevel,
    listeners: RwLock<Vec<Arc<dyn LogListener>>>,
}

impl Logger {
    pub fn new(active_level: LogLevel) -> Self {
        Self {
            active_level,
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn active_level(&self) -> LogLevel {
        self.active_level
    }

    pub fn subscribe(&self, listener: Arc<dyn LogListener>) {
        match self.listeners.write() {
            Ok(mut listeners) => listeners.push(listener),
            Err(poisoned) => poisoned.into_inner().push(listener),
        }
    }

    pub fn log(&self, entry: &LogEntry) {
        if entry.level == LogLevel::Off || entry.level < self.active_level {
            return;
        }

        let listeners = match self.listeners.read() {
            Ok(listeners) => listeners,
            Err(poisoned) => poisoned.into_inner(),
        };
        for listener in listeners.iter() {
            listener.log(entry);
        }
    }

    pub fn write(&self, message: impl Into<String>, level: LogLevel) {
        self.log(&LogEntry::new(level, message));
    }

    pub fn error(&self, error: &ServiceError) {
        self.write(error.to_string(), LogLevel::Error);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::default())
    }
}
