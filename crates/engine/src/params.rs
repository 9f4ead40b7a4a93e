// crates/engine/src/params.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ResolveError;

pub const DIRECTORY: &str = "directory";
pub const DAYS: &str = "days";
pub const DELETE_SUBDIRECTORIES: &str = "deleteSubdirectories";
pub const DEBUG: &str = "debug";

/// Key-value parameter bag handed over by the task host.
///
/// Values are kept as the raw strings the host supplied; typing and
/// validation happen in [`crate::resolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskParams(BTreeMap<String, String>);

impl TaskParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value. An empty string counts as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Overlay `other` on top of `self`; keys from `other` win.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a JSON object into a bag.
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidParams`] for malformed JSON, a non-object
    /// root, or array/object values.
    pub fn from_json_str(json: &str) -> Result<Self, ResolveError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ResolveError::InvalidParams(e.to_string()))?;
        Self::from_json_value(&value)
    }

    /// # Errors
    /// See [`TaskParams::from_json_str`].
    pub fn from_json_value(value: &Value) -> Result<Self, ResolveError> {
        let Value::Object(map) = value else {
            return Err(ResolveError::InvalidParams(
                "expected a JSON object".to_string(),
            ));
        };

        let mut params = Self::new();
        for (key, value) in map {
            let literal = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ResolveError::InvalidParams(format!(
                        "value for '{key}' must be a string, number or boolean"
                    )));
                }
            };
            params.insert(key.clone(), literal);
        }
        Ok(params)
    }
}
