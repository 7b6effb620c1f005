use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryEntry {
    pub match_id: Option<String>,
    pub map: Option<MapInfo>,
    pub currenttier_patched: Option<String>,
    #[serde(default)]
    pub mmr_change_to_last_game: i64,
    pub elo: Option<i64>,
    pub date: Option<String>,
    pub date_raw: Option<i64>,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MapInfo {
    pub name: String,
    pub id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub data: Option<MatchDetails>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchDetails {
    pub players: Vec<MatchPlayer>,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub name: String,
    pub tag: String,
    pub stats: PlayerStats,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub score: Option<u32>,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}
