use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::MatchDto;

/// Filters applied when listing match ids for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchIdsQuery {
    /// Match type, e.g. `tourney`, `ranked`, `normal`.
    pub match_type: String,
    pub count: u32,
}

impl Default for MatchIdsQuery {
    fn default() -> Self {
        Self {
            match_type: "tourney".into(),
            count: 15,
        }
    }
}

impl RiotClient {
    /// Get list of match IDs by PUUID, most recent first
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_match_ids(
        &self,
        puuid: &str,
        query: &MatchIdsQuery,
    ) -> Result<Vec<String>, AppError> {
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids",
            self.match_base(),
            puuid
        );
        let count = query.count.to_string();

        self.get(
            &url,
            &[("type", query.match_type.as_str()), ("count", count.as_str())],
        )
        .await
    }

    /// Get match details by match ID
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = format!("{}/lol/match/v5/matches/{}", self.match_base(), match_id);

        self.get(&url, &[]).await
    }
}
