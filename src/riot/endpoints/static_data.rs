use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::ChampionDto;

impl RiotClient {
    /// Get static champion data, including its display name.
    pub async fn get_champion(
        &self,
        region: Region,
        champion_id: i32,
    ) -> Result<ChampionDto, AppError> {
        let url = format!(
            "{}/lol/static-data/v3/champions/{}",
            self.platform_url(region),
            champion_id
        );

        self.get(&url).await
    }
}
