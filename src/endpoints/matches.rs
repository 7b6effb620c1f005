use urlencoding::encode;

use crate::client::{HenrikClient, Upstream};
use crate::error::TrackerError;

impl HenrikClient {
    /// Raw match list for a player
    pub async fn matches(
        &self,
        region: &str,
        name: &str,
        tag: &str,
    ) -> Result<Upstream, TrackerError> {
        let url = format!(
            "{}/valorant/v3/matches/{}/{}/{}",
            self.base_url,
            region,
            encode(name),
            encode(tag)
        );
        self.relay_get(&url).await
    }

    /// Full match record (per-player kills, deaths, assists, etc.)
    pub async fn match_details(
        &self,
        region: &str,
        match_id: &str,
    ) -> Result<Upstream, TrackerError> {
        let url = format!(
            "{}/valorant/v4/match/{}/{}",
            self.base_url,
            region,
            encode(match_id)
        );
        self.relay_get(&url).await
    }
}
