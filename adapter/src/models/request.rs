//! Request parameter models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters of a broker provision, update or bind request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestParameters {
    /// Arbitrary caller-supplied parameters, kept sorted by key
    #[serde(default)]
    pub parameters: BTreeMap<String, Value>,

    /// Platform context (OSBAPI 2.13+)
    #[serde(default)]
    pub context: Map<String, Value>,

    /// Everything else the broker sends (plan_id, service_id, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestParameters {
    pub fn arbitrary_params(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }

    pub fn arbitrary_context(&self) -> &Map<String, Value> {
        &self.context
    }

    /// Declared platform, or an empty string when the context has none
    pub fn platform(&self) -> &str {
        self.context
            .get("platform")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
