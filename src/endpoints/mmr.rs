use urlencoding::encode;

use crate::client::{HenrikClient, Upstream};
use crate::error::TrackerError;

impl HenrikClient {
    /// Current competitive standing (tier + progress within tier) for a player
    pub async fn mmr(&self, region: &str, name: &str, tag: &str) -> Result<Upstream, TrackerError> {
        let url = format!(
            "{}/valorant/v2/mmr/{}/{}/{}",
            self.base_url,
            region,
            encode(name),
            encode(tag)
        );
        self.relay_get(&url).await
    }

    /// Competitive match summaries with rank deltas, most recent first
    pub async fn mmr_history(
        &self,
        region: &str,
        name: &str,
        tag: &str,
    ) -> Result<Upstream, TrackerError> {
        let url = format!(
            "{}/valorant/v1/mmr-history/{}/{}/{}",
            self.base_url,
            region,
            encode(name),
            encode(tag)
        );
        self.relay_get(&url).await
    }
}
