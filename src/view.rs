use chrono::{Local, TimeZone};

use crate::error::TrackerError;
use crate::models::match_data::{HistoryEntry, MatchDetails, PlayerStats};
use crate::models::mmr::CurrentData;

/// Rank Rating spans 0..=100 within a tier.
pub const RR_MAX: i64 = 100;

/// Everything the renderer needs, built in one step after all fetches settle.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready(PlayerView),
    Failed(String),
}

impl ViewState {
    /// Transition out of Loading on a failed search. Whatever was rendered
    /// before is gone; only the failure message survives.
    pub fn fail(err: &TrackerError) -> Self {
        let message = match err {
            TrackerError::RateLimited => err.to_string(),
            _ => "Failed to fetch data. Check username, tag, and region.".to_string(),
        };
        ViewState::Failed(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub profile: Profile,
    pub matches: Vec<MatchCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub tier: String,
    pub ranking_in_tier: i64,
    pub elo: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn from_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => Outcome::Win,
            -1 => Outcome::Loss,
            _ => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub map: String,
    pub tier: String,
    pub rr_delta: i64,
    pub outcome: Outcome,
    pub stats: Option<PlayerStats>,
    pub played_at: Option<String>,
}

/// Find the searched player in the match's player list. Name and tag are
/// compared case-insensitively, same as the upstream name service does.
pub fn find_player_stats(details: &MatchDetails, name: &str, tag: &str) -> Option<PlayerStats> {
    details
        .players
        .iter()
        .find(|p| {
            p.name.to_lowercase() == name.to_lowercase()
                && p.tag.to_lowercase() == tag.to_lowercase()
        })
        .map(|p| p.stats.clone())
}

/// Locale timestamp from the raw epoch field, falling back to the upstream's
/// preformatted date string.
pub fn format_played_at(entry: &HistoryEntry) -> Option<String> {
    entry
        .date_raw
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format("%c").to_string())
        .or_else(|| entry.date.clone())
}

/// One card per history entry. A missing detail just means no K/D/A line.
pub fn build_card(
    entry: &HistoryEntry,
    detail: Option<&MatchDetails>,
    name: &str,
    tag: &str,
) -> MatchCard {
    MatchCard {
        map: entry
            .map
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        tier: entry
            .currenttier_patched
            .clone()
            .unwrap_or_else(|| "Unranked".to_string()),
        rr_delta: entry.mmr_change_to_last_game,
        outcome: Outcome::from_delta(entry.mmr_change_to_last_game),
        stats: detail.and_then(|d| find_player_stats(d, name, tag)),
        played_at: format_played_at(entry),
    }
}

pub fn build_view(
    current: &CurrentData,
    history: &[HistoryEntry],
    details: &[Result<MatchDetails, TrackerError>],
    name: &str,
    tag: &str,
) -> PlayerView {
    let matches = history
        .iter()
        .zip(details.iter())
        .map(|(entry, detail)| build_card(entry, detail.as_ref().ok(), name, tag))
        .collect();

    PlayerView {
        profile: Profile {
            tier: current.currenttier_patched.clone(),
            ranking_in_tier: current.ranking_in_tier,
            elo: current.elo,
        },
        matches,
    }
}
