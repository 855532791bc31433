// src/models/core.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::matching::CandidateName;

/// An organization record from the canonical registry.
///
/// Only `name` matters to the matcher; every other attribute the registry
/// carries (id, address, tenant, ...) is kept opaque in `extra` and survives
/// serialization round trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organization {
    /// Registry identifier, when the record carries one.
    pub fn id(&self) -> Option<&str> {
        self.extra.get("id").and_then(Value::as_str)
    }
}

impl CandidateName for Organization {
    fn name(&self) -> &str {
        &self.name
    }
}
