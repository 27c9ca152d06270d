//! The log sink capability consumed by the logging transport.

use std::sync::Mutex;

use serde_json::Value;

/// Severity-tagged structured writes. Fields are ordered key/value pairs;
/// implementations decide how to render them.
pub trait Logger: Send + Sync {
    fn debug(&self, msg: &str, fields: &[(&str, Value)]);
    fn info(&self, msg: &str, fields: &[(&str, Value)]);
    fn error(&self, msg: &str, fields: &[(&str, Value)]);
}

/// Default sink: emits through `tracing` with the fields rendered as one
/// JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

fn render(fields: &[(&str, Value)]) -> String {
    let mut map = serde_json::Map::with_capacity(fields.len());
    for (key, value) in fields {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Object(map).to_string()
}

impl Logger for TracingLogger {
    fn debug(&self, msg: &str, fields: &[(&str, Value)]) {
        tracing::debug!(target: "logscrub", fields = %render(fields), "{msg}");
    }

    fn info(&self, msg: &str, fields: &[(&str, Value)]) {
        tracing::info!(target: "logscrub", fields = %render(fields), "{msg}");
    }

    fn error(&self, msg: &str, fields: &[(&str, Value)]) {
        tracing::error!(target: "logscrub", fields = %render(fields), "{msg}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, Value)>,
}

impl LogEntry {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Capture sink: records entries in memory. Used by tests and anywhere the
/// embedding system wants to inspect what would have been logged.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push(&self, level: Level, msg: &str, fields: &[(&str, Value)]) {
        let entry = LogEntry {
            level,
            message: msg.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        };
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, msg: &str, fields: &[(&str, Value)]) {
        self.push(Level::Debug, msg, fields);
    }

    fn info(&self, msg: &str, fields: &[(&str, Value)]) {
        self.push(Level::Info, msg, fields);
    }

    fn error(&self, msg: &str, fields: &[(&str, Value)]) {
        self.push(Level::Error, msg, fields);
    }
}
