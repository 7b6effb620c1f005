use std::time::Duration;

use futures::future::join_all;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::TrackerError;
use crate::models::match_data::{HistoryEntry, HistoryResponse, MatchDetails, MatchResponse};
use crate::models::mmr::{CurrentData, MmrResponse};
use crate::view::{self, PlayerView};

/// How many history entries get per-match stat enrichment.
pub const HISTORY_WINDOW: usize = 10;

#[derive(Clone)]
pub struct ProxyClient {
    http: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, TrackerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TrackerError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        if resp.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(TrackerError::RateLimited);
        }
        Ok(resp.json().await?)
    }

    /// Current standing. Anything without `data.current_data` counts as a miss.
    pub async fn fetch_mmr(
        &self,
        region: &str,
        name: &str,
        tag: &str,
    ) -> Result<CurrentData, TrackerError> {
        let body = self
            .get_json(
                "/api/mmr",
                &[("region", region), ("name", name), ("tag", tag)],
            )
            .await?;
        let parsed: MmrResponse = serde_json::from_value(body)?;
        parsed
            .data
            .and_then(|d| d.current_data)
            .ok_or(TrackerError::MmrUnavailable)
    }

    /// Match summaries, most recent first. `data` must be an array.
    pub async fn fetch_history(
        &self,
        region: &str,
        name: &str,
        tag: &str,
    ) -> Result<Vec<HistoryEntry>, TrackerError> {
        let body = self
            .get_json(
                "/api/mmr-history",
                &[("region", region), ("name", name), ("tag", tag)],
            )
            .await?;
        let parsed: HistoryResponse = serde_json::from_value(body)?;
        let entries = parsed
            .data
            .as_ref()
            .and_then(|d| d.as_array())
            .ok_or(TrackerError::MalformedHistory)?;

        let entries: Result<Vec<HistoryEntry>, _> = entries
            .iter()
            .map(|v| serde_json::from_value(v.clone()))
            .collect();
        Ok(entries?)
    }

    pub async fn fetch_match(
        &self,
        region: &str,
        match_id: &str,
    ) -> Result<MatchDetails, TrackerError> {
        let body = self
            .get_json("/api/match", &[("region", region), ("matchid", match_id)])
            .await?;
        let parsed: MatchResponse = serde_json::from_value(body)?;
        parsed.data.ok_or(TrackerError::Api {
            status: 404,
            message: "Match not found".into(),
        })
    }

    /// Fan out one detail fetch per entry and wait for all of them to settle.
    /// Each entry gets its own Result, so one dead fetch cannot sink the rest.
    pub async fn fetch_details(
        &self,
        region: &str,
        entries: &[HistoryEntry],
    ) -> Vec<Result<MatchDetails, TrackerError>> {
        join_all(entries.iter().map(|entry| async move {
            match &entry.match_id {
                Some(id) => self.fetch_match(region, id).await,
                None => Err(TrackerError::Api {
                    status: 404,
                    message: "History entry has no match id".into(),
                }),
            }
        }))
        .await
    }

    /// The whole search: MMR, then history, then per-match enrichment,
    /// joined into an immutable view.
    pub async fn load_player(
        &self,
        region: &str,
        name: &str,
        tag: &str,
    ) -> Result<PlayerView, TrackerError> {
        let current = self.fetch_mmr(region, name, tag).await?;
        let mut history = self.fetch_history(region, name, tag).await?;
        history.truncate(HISTORY_WINDOW);

        let details = self.fetch_details(region, &history).await;
        Ok(view::build_view(&current, &history, &details, name, tag))
    }
}
