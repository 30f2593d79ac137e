//! OpenCGA response envelope
//!
//! Calls return the raw JSON. Callers that want to look inside the standard
//! envelope (events, result counts) can convert it with
//! [`RestResponse::from_value`].

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of a server event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Info,
    Warning,
    Error,
    #[serde(other)]
    Other,
}

/// A message attached to a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One query result inside the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub num_results: i64,
    #[serde(default)]
    pub num_matches: i64,
    #[serde(default)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Standard OpenCGA response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub responses: Vec<QueryResult>,
}

impl RestResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Every event, envelope-level first
    pub fn all_events(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .chain(self.responses.iter().flat_map(|r| r.events.iter()))
    }

    /// Message of the first error event, if any
    pub fn first_error(&self) -> Option<&str> {
        self.all_events()
            .filter(|e| e.kind == EventType::Error)
            .find_map(|e| e.message.as_deref())
    }

    /// All results across every query result
    pub fn results(&self) -> impl Iterator<Item = &Value> {
        self.responses.iter().flat_map(|r| r.results.iter())
    }

    pub fn num_results(&self) -> i64 {
        self.responses.iter().map(|r| r.num_results).sum()
    }
}
