use serde_json::Value;
use uuid::Uuid;

pub const SUMMARY_EXPORT: &str = "$summary";

/// Per-invocation state handed to an action run.
///
/// Exports are kept in insertion order, repeated keys included, so callers can
/// see exactly what a run recorded.
#[derive(Debug)]
pub struct ExecutionContext {
    run_id: Uuid,
    exports: Vec<(String, Value)>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            exports: Vec::new(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn export(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.exports.push((key.into(), value.into()));
    }

    pub fn exports(&self) -> &[(String, Value)] {
        &self.exports
    }

    /// Latest value exported under `key`.
    pub fn exported(&self, key: &str) -> Option<&Value> {
        self.exports
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn summary(&self) -> Option<&str> {
        self.exported(SUMMARY_EXPORT).and_then(Value::as_str)
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
