use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MmrResponse {
    pub data: Option<MmrData>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MmrData {
    pub current_data: Option<CurrentData>,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentData {
    pub currenttier_patched: String,
    pub ranking_in_tier: i64,
    pub elo: Option<i64>,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}
