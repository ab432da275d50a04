use serde::Deserialize;
use serde_json::{Map, Value};

/// A single result from the address-search service. The schema is owned by
/// the service; only `display_name` and `type` are read, everything else is
/// carried along untouched.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Place {
    #[serde(default)]
    pub display_name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub address: Map<String, Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
