use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::auth::{AadClientFactory, TokenClientProvider};
use crate::bookmarks::BookmarkClient;
use crate::config::AppSettings;
use crate::error::ServiceError;
use crate::logging::appinsights::AppInsightsSettings;
use crate::logging::{
    AppInsightsClient, CustomProperties, ExceptionReporter, LogSink, Logger, TelemetryClient,
};
use crate::LogLevel;

/// Services built once at application start-up and shared by every
/// component.
pub struct ServiceContext {
    pub settings: AppSettings,
    pub sink: Arc<LogSink>,
    pub logger: Arc<Logger>,
    pub reporter: Arc<ExceptionReporter>,
    pub provider: TokenClientProvider,
}

impl ServiceContext {
    /// Wire Application Insights, the log sink and Azure AD token acquisition.
    ///
    /// Returns the context and the telemetry sender task. Must be called from
    /// within a Tokio runtime.
    pub fn start(
        settings: AppSettings,
        current_user: Option<&str>,
    ) -> Result<(Self, JoinHandle<()>), ServiceError> {
        let (telemetry, worker) =
            AppInsightsClient::start(AppInsightsSettings::from_app_settings(&settings, current_user))?;

        let context = Self::with_telemetry(settings, Arc::new(telemetry));
        Ok((context, worker))
    }

    /// Wire everything around an existing telemetry client.
    pub fn with_telemetry(settings: AppSettings, telemetry: Arc<dyn TelemetryClient>) -> Self {
        let properties = CustomProperties::new(&settings.tenant_name, &settings.app_name);
        let sink = Arc::new(LogSink::with_log_console(telemetry, properties));

        let logger = Arc::new(Logger::new(LogLevel::Info));
        logger.subscribe(sink.clone());

        let reporter = Arc::new(ExceptionReporter::new(logger.clone()));
        let provider =
            TokenClientProvider::new(Arc::new(AadClientFactory::new(settings.identity.clone())));

        Self {
            settings,
            sink,
            logger,
            reporter,
            provider,
        }
    }

    /// Connect a bookmark client with this context's provider and reporter.
    pub async fn bookmark_client(&self) -> Result<BookmarkClient, ServiceError> {
        BookmarkClient::connect(&self.provider, &self.settings, self.reporter.clone()).await
    }
}
