use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::ChampionMasteryDto;

impl RiotClient {
    /// Get the mastery a summoner has on a single champion.
    pub async fn get_champion_mastery_by_champion(
        &self,
        region: Region,
        summoner_id: i64,
        champion_id: i32,
    ) -> Result<ChampionMasteryDto, AppError> {
        let url = format!(
            "{}/lol/champion-mastery/v3/champion-masteries/by-summoner/{}/by-champion/{}",
            self.platform_url(region),
            summoner_id,
            champion_id
        );

        self.get(&url).await
    }
}
