use async_trait::async_trait;

mod endpoints;

pub mod client;
pub mod metrics;
pub mod region;
pub mod types;

pub use client::RiotClient;
pub use metrics::RequestMetrics;
pub use region::Region;
pub use types::MatchDto;

use crate::error::AppError;

/// Upstream operations the match enrichment relies on.
///
/// Each call maps to exactly one provider request and resolves to the field of
/// interest, or to the error variant classified from the response status.
#[async_trait]
pub trait LolApi: Send + Sync {
    /// Account id of the summoner with the given display name.
    async fn get_account_id(&self, region: Region, summoner_name: &str) -> Result<i64, AppError>;

    /// Game id of the most recent match played by the account.
    async fn get_latest_match_id(&self, region: Region, account_id: i64) -> Result<u64, AppError>;

    async fn get_match(&self, region: Region, game_id: u64) -> Result<MatchDto, AppError>;

    async fn get_champion_name(&self, region: Region, champion_id: i32) -> Result<String, AppError>;

    async fn get_champion_mastery(
        &self,
        region: Region,
        champion_id: i32,
        summoner_id: i64,
    ) -> Result<i32, AppError>;
}

#[async_trait]
impl LolApi for RiotClient {
    async fn get_account_id(&self, region: Region, summoner_name: &str) -> Result<i64, AppError> {
        tracing::trace!("[RIOT] get_account_id {} in {}", summoner_name, region);
        let summoner = self.get_summoner_by_name(region, summoner_name).await?;

        Ok(summoner.account_id)
    }

    async fn get_latest_match_id(&self, region: Region, account_id: i64) -> Result<u64, AppError> {
        tracing::trace!("[RIOT] get_latest_match_id {} in {}", account_id, region);
        let matchlist = self.get_matchlist_by_account(region, account_id).await?;

        matchlist
            .matches
            .first()
            .map(|m| m.game_id)
            .ok_or(AppError::NoMatches)
    }

    async fn get_match(&self, region: Region, game_id: u64) -> Result<MatchDto, AppError> {
        tracing::trace!("[RIOT] get_match {} in {}", game_id, region);
        RiotClient::get_match(self, region, game_id).await
    }

    async fn get_champion_name(&self, region: Region, champion_id: i32) -> Result<String, AppError> {
        tracing::trace!("[RIOT] get_champion_name {} in {}", champion_id, region);
        let champion = self.get_champion(region, champion_id).await?;

        Ok(champion.name)
    }

    async fn get_champion_mastery(
        &self,
        region: Region,
        champion_id: i32,
        summoner_id: i64,
    ) -> Result<i32, AppError> {
        tracing::trace!(
            "[RIOT] get_champion_mastery {} for {} in {}",
            champion_id,
            summoner_id,
            region
        );
        let mastery = self
            .get_champion_mastery_by_champion(region, summoner_id, champion_id)
            .await?;

        Ok(mastery.champion_level)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::{LolApi, Region, RequestMetrics, RiotClient};
    use crate::error::AppError;

    fn client_for(server: &MockServer) -> RiotClient {
        RiotClient::with_base_url(
            "test-key".into(),
            format!("{}/{{platform}}", server.base_url()),
            RequestMetrics::new(),
        )
    }

    #[tokio::test]
    async fn account_id_is_resolved_from_summoner_name() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/euw1/lol/summoner/v3/summoners/by-name/H4uZ")
                    .query_param("api_key", "test-key");
                then.status(200)
                    .json_body(json!({ "id": 19682428, "accountId": 23497843, "name": "H4uZ" }));
            })
            .await;

        let client = client_for(&server);
        let account_id = client.get_account_id(Region::Euw, "H4uZ").await.unwrap();

        assert_eq!(account_id, 23497843);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn unknown_summoner_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/na1/lol/summoner/v3/summoners/by-name/ghost");
                then.status(404)
                    .json_body(json!({ "status": { "message": "Data not found", "status_code": 404 } }));
            })
            .await;

        let client = client_for(&server);
        let err = client.get_account_id(Region::Na, "ghost").await.unwrap_err();

        assert!(matches!(err, AppError::SummonerNotFound(ref name) if name == "ghost"));
        assert_eq!(err.to_string(), "Summoner ghost does not exist.");
    }

    #[tokio::test]
    async fn summoner_name_is_percent_encoded() {
        let server = MockServer::start_async().await;
        // Left unencoded, `?` would end the path and turn `chen` into a query key.
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path_contains("/euw1/lol/summoner/v3/summoners/by-name/miss")
                    .path_contains("chen")
                    .query_param("api_key", "test-key");
                then.status(200).json_body(json!({ "accountId": 1 }));
            })
            .await;

        let client = client_for(&server);
        let account_id = client.get_account_id(Region::Euw, "miss?chen").await.unwrap();

        assert_eq!(account_id, 1);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn account_lookup_server_error_is_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/euw1/lol/summoner/v3/summoners/by-name/H4uZ");
                then.status(500)
                    .json_body(json!({ "status": { "message": "Internal server error", "status_code": 500 } }));
            })
            .await;

        let client = client_for(&server);
        let err = client.get_account_id(Region::Euw, "H4uZ").await.unwrap_err();

        assert!(matches!(err, AppError::Upstream { status: 500, .. }));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[tokio::test]
    async fn latest_match_is_first_of_matchlist() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/euw1/lol/match/v3/matchlists/by-account/23497843");
                then.status(200).json_body(json!({
                    "matches": [{ "gameId": 3296743698u64 }, { "gameId": 3296000000u64 }],
                    "totalGames": 2
                }));
            })
            .await;

        let client = client_for(&server);
        let game_id = client
            .get_latest_match_id(Region::Euw, 23497843)
            .await
            .unwrap();

        assert_eq!(game_id, 3296743698);
    }

    #[tokio::test]
    async fn unprocessable_matchlist_means_no_matches() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/euw1/lol/match/v3/matchlists/by-account/2");
                then.status(422)
                    .json_body(json!({ "status": { "message": "Unprocessable", "status_code": 422 } }));
            })
            .await;

        let client = client_for(&server);
        let err = client.get_latest_match_id(Region::Euw, 2).await.unwrap_err();

        assert!(matches!(err, AppError::NoMatches));
    }

    #[tokio::test]
    async fn empty_matchlist_means_no_matches() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/euw1/lol/match/v3/matchlists/by-account/2");
                then.status(200).json_body(json!({ "matches": [] }));
            })
            .await;

        let client = client_for(&server);
        let err = client.get_latest_match_id(Region::Euw, 2).await.unwrap_err();

        assert!(matches!(err, AppError::NoMatches));
    }

    #[tokio::test]
    async fn not_found_on_other_endpoints_is_a_request_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/euw1/lol/match/v3/matches/1");
                then.status(404)
                    .json_body(json!({ "status": { "message": "Match does not exist", "status_code": 404 } }));
            })
            .await;

        let client = client_for(&server);
        let err = LolApi::get_match(&client, Region::Euw, 1).await.unwrap_err();

        assert!(matches!(err, AppError::Request { status: 404, .. }));
        assert_eq!(err.to_string(), "Match does not exist");
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn champion_name_and_mastery_are_extracted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/kr1/lol/static-data/v3/champions/53");
                then.status(200)
                    .json_body(json!({ "id": 53, "key": "Blitzcrank", "name": "Blitzcrank", "title": "the Great Steam Golem" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(
                    "/kr1/lol/champion-mastery/v3/champion-masteries/by-summoner/19682428/by-champion/53",
                );
                then.status(200).json_body(json!({
                    "championId": 53,
                    "championLevel": 6,
                    "championPoints": 61234,
                    "playerId": 19682428
                }));
            })
            .await;

        let client = client_for(&server);

        let name = client.get_champion_name(Region::Kr, 53).await.unwrap();
        let level = client
            .get_champion_mastery(Region::Kr, 53, 19682428)
            .await
            .unwrap();

        assert_eq!(name, "Blitzcrank");
        assert_eq!(level, 6);
        assert_eq!(client.metrics().requests(), 2);
    }
}
