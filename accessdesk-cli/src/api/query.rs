//! Query and response types for the directory boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parameterized directory query. The text is backend-defined; the
/// portal only threads it through and consumes the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub params: Vec<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }
}

/// Rows come back as opaque JSON objects and are normalized at the edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "resultSet", default)]
    pub result_set: Vec<Value>,
}

impl QueryResponse {
    pub fn new(result_set: Vec<Value>) -> Self {
        Self { result_set }
    }

    pub fn is_empty(&self) -> bool {
        self.result_set.is_empty()
    }
}
