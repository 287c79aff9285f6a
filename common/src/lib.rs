//! Wire data model shared between the collector-facing backend and the
//! aggregation engine. Field names follow the collector's JSON payloads.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub id: String,
    pub map_name: Option<String>,
    pub winner: Option<String>,
    pub duration: u64,
    pub timestamp: chrono::NaiveDateTime,
    #[serde(default)]
    pub kills: Vec<Kill>,
    #[serde(default)]
    pub players: Vec<RoundPlayer>,
    #[serde(default)]
    pub buys: Vec<RoundBuy>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Kill {
    pub attacker_steamid: Option<String>,
    pub attacker_role: Option<String>,
    pub victim_steamid: String,
    pub victim_role: Option<String>,
    pub weapon: Option<String>,
    #[serde(default)]
    pub headshot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundPlayer {
    pub steam_id: String,
    pub role_start: Option<String>,
    pub role_end: Option<String>,
    pub karma_diff: Option<i64>,
    pub points_diff: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundBuy {
    pub steam_id: String,
    pub role: Option<String>,
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerEntry {
    pub steam_id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
