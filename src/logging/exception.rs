use std::sync::Arc;

use crate::error::ServiceError;
use crate::logging::entry::LogEntry;
use crate::logging::logger::Logger;
use crate::LogLevel;

/// Classifies errors and forwards them to the [`Logger`].
pub struct ExceptionReporter {
    logger: Arc<Logger>,
}

impl ExceptionReporter {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn report(&self, error: &ServiceError) {
        self.logger.log(&Self::entry_for(error));
    }

    fn entry_for(error: &ServiceError) -> LogEntry {
        match error {
            ServiceError::RemoteData { payload, .. } => {
                let message = error
                    .odata_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string());
                LogEntry::new(LogLevel::Error, message).with_data(payload.clone())
            }
            ServiceError::Generic(message) => LogEntry::new(LogLevel::Error, message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::logging::logger::LogListener;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<LogEntry>>);

    impl LogListener for Recorder {
        fn log(&self, entry: &LogEntry) {
            self.0.lock().unwrap().push(entry.clone());
        }
    }

    fn reporter() -> (ExceptionReporter, Arc<Recorder>) {
        let logger = Arc::new(Logger::default());
        let recorder = Arc::new(Recorder::default());
        logger.subscribe(recorder.clone());
        (ExceptionReporter::new(logger), recorder)
    }

    #[test]
    fn remote_odata_error_uses_nested_message() {
        let (reporter, recorder) = reporter();
        let payload = json!({"odata.error": {"message": {"value": "Item does not exist"}}});

        reporter.report(&ServiceError::RemoteData {
            status: 404,
            payload: payload.clone(),
        });

        let entries = recorder.0.lock().unwrap();
        assert_eq!(
            *entries,
            vec![LogEntry::new(LogLevel::Error, "Item does not exist").with_data(payload)]
        );
    }

    #[test]
    fn remote_error_without_odata_falls_back_to_display() {
        let (reporter, recorder) = reporter();

        reporter.report(&ServiceError::remote(502, "bad gateway"));

        let entries = recorder.0.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "remote data error (502): \"bad gateway\"");
        assert_eq!(entries[0].data, Some(json!("bad gateway")));
    }

    #[test]
    fn generic_error_logs_message_without_payload() {
        let (reporter, recorder) = reporter();

        reporter.report(&ServiceError::Generic("connection reset".to_string()));

        let entries = recorder.0.lock().unwrap();
        assert_eq!(*entries, vec![LogEntry::new(LogLevel::Error, "connection reset")]);
    }
}
