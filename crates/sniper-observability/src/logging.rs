//! One JSON line per event, tagged with the request it belongs to.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;
use sniper_core::{Method, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Microseconds since the request started.
    pub elapsed_us: u64,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl LogEntry {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

/// Logger bound to a single request.
///
/// Entries go to stderr, which Spin captures per component.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    method: Option<Method>,
    route: Option<String>,
    started: Instant,
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            method: None,
            route: None,
            started: Instant::now(),
            min_level: LogLevel::Info,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Drop entries below `level`.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// The entry that would be written, or `None` when filtered out.
    fn entry(
        &self,
        level: LogLevel,
        message: String,
        fields: BTreeMap<String, Value>,
    ) -> Option<LogEntry> {
        (level >= self.min_level).then(|| LogEntry {
            level,
            message,
            request_id: self.request_id.to_string(),
            method: self.method.map(|m| m.as_str()),
            route: self.route.clone(),
            elapsed_us: self.started.elapsed().as_micros() as u64,
            fields,
        })
    }
}

/// Fluent builder for one entry.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, Value>,
}

impl<'a> LogBuilder<'a> {
    fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.into()));
        self
    }

    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Whole milliseconds.
    pub fn duration_ms(mut self, key: &str, duration: Duration) -> Self {
        self.fields
            .insert(key.to_string(), Value::from(duration.as_millis() as u64));
        self
    }

    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, self.message, self.fields)
    }

    pub fn emit(self) {
        if let Some(entry) = self.build() {
            eprintln!("{}", entry.to_json());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("req-1"))
            .with_method(Method::Post)
            .with_route("/api/contact")
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = logger()
            .info_builder("Contact submission handled")
            .field("outcome", "sent")
            .field_i64("notifications", 1)
            .duration_ms("gateway_ms", Duration::from_millis(42))
            .build()
            .expect("info passes default filter");

        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["request_id"], "req-1");
        assert_eq!(json["method"], "POST");
        assert_eq!(json["route"], "/api/contact");
        assert_eq!(json["outcome"], "sent");
        assert_eq!(json["notifications"], 1);
        assert_eq!(json["gateway_ms"], 42);
        assert!(json["elapsed_us"].is_u64());
    }

    #[test]
    fn test_min_level_filters() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(logger.info_builder("quiet").build().is_none());
        assert!(logger.debug_builder("quieter").build().is_none());
        assert!(logger.error_builder("loud").build().is_some());
    }

    #[test]
    fn test_default_level_hides_debug() {
        assert!(logger().debug_builder("route").build().is_none());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn test_optional_fields_skipped() {
        let entry = StructuredLogger::new(RequestId::from_string("r"))
            .info_builder("bare")
            .build()
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert!(json.get("route").is_none());
        assert!(json.get("method").is_none());
    }
}
