//! Report document written for each successful run

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AgentError, AgentResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    /// Local time the report was produced, RFC 3339
    pub timestamp: String,
    pub url: String,
    pub keywords: Vec<String>,
    /// Characters of page content sent to the model, after truncation
    pub content_length: usize,
    /// Model output: parsed JSON when the model returned JSON, otherwise the raw text
    pub analysis: Value,
}

impl SeoReport {
    pub fn new(url: impl Into<String>, keywords: Vec<String>, content_length: usize, analysis: Value) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            url: url.into(),
            keywords,
            content_length,
            analysis,
        }
    }

    /// Steps listed under `actionable_steps`, flattened to one line each
    pub fn actionable_steps(&self) -> Vec<String> {
        match self.analysis.get("actionable_steps") {
            Some(Value::Array(items)) => items.iter().filter_map(step_text).collect(),
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(key, value)| step_text(value).map(|text| format!("{}: {}", key, text)))
                .collect(),
            Some(other) => step_text(other).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

fn step_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}

/// Turn raw model text into the report payload.
///
/// A JSON object carrying an `error` key is a failed analysis, not a report.
pub fn interpret_analysis(raw: &str) -> AgentResult<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => match map.get("error") {
            Some(Value::String(message)) => Err(AgentError::ModelReportedError(message.clone())),
            Some(other) => Err(AgentError::ModelReportedError(other.to_string())),
            None => Ok(Value::Object(map)),
        },
        Ok(other) => Ok(other),
        Err(_) => Ok(Value::String(raw.to_string())),
    }
}
