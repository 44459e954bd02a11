use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::AccountDto;
use crate::riot_id::RiotId;

impl RiotClient {
    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_account_by_riot_id(&self, riot_id: &RiotId) -> Result<AccountDto, AppError> {
        tracing::debug!(%riot_id, "looking up account");

        self.get(&self.account_url(riot_id), &[]).await
    }

    fn account_url(&self, riot_id: &RiotId) -> String {
        format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.account_base(),
            urlencoding::encode(&riot_id.game_name),
            urlencoding::encode(&riot_id.tag_line)
        )
    }
}
