use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::SummonerDto;

impl RiotClient {
    /// Get summoner by its display name.
    /// A 404 means the summoner does not exist on this platform.
    pub async fn get_summoner_by_name(
        &self,
        region: Region,
        summoner_name: &str,
    ) -> Result<SummonerDto, AppError> {
        let url = format!(
            "{}/lol/summoner/v3/summoners/by-name/{}",
            self.platform_url(region),
            urlencoding::encode(summoner_name)
        );

        self.get(&url).await.map_err(|e| {
            if matches!(&e, AppError::Request { status: 404, .. }) {
                AppError::SummonerNotFound(summoner_name.to_string())
            } else {
                e
            }
        })
    }
}
