use serde::Deserialize;

// ============================================================================
// Errors
// ============================================================================

/// Error document returned by the provider alongside non-200 statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBodyDto {
    pub status: ErrorStatusDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorStatusDto {
    pub message: String,
}

// ============================================================================
// Summoner-v3
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub account_id: i64,
}

// ============================================================================
// Match-v3
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchlistDto {
    #[serde(default)]
    pub matches: Vec<MatchReferenceDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReferenceDto {
    pub game_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub game_id: u64,
    pub participant_identities: Vec<ParticipantIdentityDto>,
    pub participants: Vec<ParticipantDto>,
}

impl MatchDto {
    /// Stats record of the given participant, if the match carries one.
    pub fn participant(&self, participant_id: i32) -> Option<&ParticipantDto> {
        self.participants
            .iter()
            .find(|p| p.participant_id == participant_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentityDto {
    pub participant_id: i32,
    pub player: PlayerDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub summoner_id: i64,
    pub summoner_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub participant_id: i32,
    pub team_id: i32,
    pub champion_id: i32,
}

// ============================================================================
// Static-data-v3
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDto {
    pub name: String,
}

// ============================================================================
// Champion-mastery-v3
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_level: i32,
}

#[cfg(test)]
mod tests {
    use super::MatchDto;

    #[test]
    fn participant_join_by_id() {
        let match_data: MatchDto = serde_json::from_str(
            r#"{
                "gameId": 42,
                "participantIdentities": [
                    {"participantId": 1, "player": {"summonerId": 10, "summonerName": "a"}},
                    {"participantId": 2, "player": {"summonerId": 20, "summonerName": "b"}}
                ],
                "participants": [
                    {"participantId": 2, "teamId": 200, "championId": 53},
                    {"participantId": 1, "teamId": 100, "championId": 4}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(match_data.participant(1).unwrap().champion_id, 4);
        assert_eq!(match_data.participant(2).unwrap().team_id, 200);
        assert!(match_data.participant(3).is_none());
    }
}
