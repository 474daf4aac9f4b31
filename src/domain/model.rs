use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Combined payload served at `/`. Both upstream bodies are carried as
/// opaque JSON values; their internal shape is never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipInfo {
    #[serde(rename = "captainsLog")]
    pub captains_log: Value,
    pub crew: Value,
}
