use async_trait::async_trait;

use crate::error::AppError;
use crate::riot_id::RiotId;

pub mod client;
pub mod endpoints;
pub mod region;
pub mod types;

pub use client::RiotClient;
pub use endpoints::match_v5::MatchIdsQuery;
pub use region::Region;
pub use types::{AccountDto, MatchDto};

/// The three lookups needed to build a match history report.
#[async_trait]
pub trait MatchHistorySource: Send + Sync {
    async fn account_by_riot_id(&self, riot_id: &RiotId) -> Result<AccountDto, AppError>;

    async fn match_ids(
        &self,
        puuid: &str,
        query: &MatchIdsQuery,
    ) -> Result<Vec<String>, AppError>;

    async fn match_by_id(&self, match_id: &str) -> Result<MatchDto, AppError>;
}

#[async_trait]
impl MatchHistorySource for RiotClient {
    async fn account_by_riot_id(&self, riot_id: &RiotId) -> Result<AccountDto, AppError> {
        self.get_account_by_riot_id(riot_id).await
    }

    async fn match_ids(
        &self,
        puuid: &str,
        query: &MatchIdsQuery,
    ) -> Result<Vec<String>, AppError> {
        self.get_match_ids(puuid, query).await
    }

    async fn match_by_id(&self, match_id: &str) -> Result<MatchDto, AppError> {
        self.get_match(match_id).await
    }
}
