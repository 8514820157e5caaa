use serde::Serialize;

/// Application Insights severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    Verbose,
    Information,
    Warning,
    Error,
    Critical,
}

impl SeverityLevel {
    /// Numeric value used on the wire.
    pub fn as_i32(self) -> i32 {
        match self {
            SeverityLevel::Verbose => 0,
            SeverityLevel::Information => 1,
            SeverityLevel::Warning => 2,
            SeverityLevel::Error => 3,
            SeverityLevel::Critical => 4,
        }
    }
}

impl Serialize for SeverityLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

/// Metadata attached to every telemetry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomProperties {
    #[serde(rename = "Tenant")]
    pub tenant: String,
    #[serde(rename = "App_Name")]
    pub app_name: String,
}

impl CustomProperties {
    pub fn new(tenant: &str, app_name: &str) -> Self {
        Self {
            tenant: tenant.to_string(),
            app_name: app_name.to_string(),
        }
    }
}

/// Remote telemetry backend.
pub trait TelemetryClient: Send + Sync {
    fn track_trace(&self, message: &str, severity: SeverityLevel, properties: &CustomProperties);

    fn track_exception(
        &self,
        message: &str,
        severity: SeverityLevel,
        properties: &CustomProperties,
    );

    fn track_event(&self, name: &str, properties: &CustomProperties);
}
