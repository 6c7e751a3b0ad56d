use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::{MatchDto, MatchlistDto};

impl RiotClient {
    /// Get the match list of an account, most recent first.
    /// The provider answers 422 for accounts without any recorded game.
    pub async fn get_matchlist_by_account(
        &self,
        region: Region,
        account_id: i64,
    ) -> Result<MatchlistDto, AppError> {
        let url = format!(
            "{}/lol/match/v3/matchlists/by-account/{}",
            self.platform_url(region),
            account_id
        );

        self.get(&url).await.map_err(|e| {
            if matches!(&e, AppError::Request { status: 422, .. }) {
                AppError::NoMatches
            } else {
                e
            }
        })
    }

    /// Get match details by game ID.
    pub async fn get_match(&self, region: Region, game_id: u64) -> Result<MatchDto, AppError> {
        let url = format!("{}/lol/match/v3/matches/{}", self.platform_url(region), game_id);

        self.get(&url).await
    }
}
