use serde::Serialize;

/// Latest match of a summoner with every participant enriched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub game_id: u64,
    pub participants: Vec<Participant>,
}

impl MatchSummary {
    /// Wrap participants in the deterministic response order.
    pub fn new(game_id: u64, mut participants: Vec<Participant>) -> Self {
        participants.sort_by_key(Participant::sort_key);

        Self {
            game_id,
            participants,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub summoner_id: i64,
    pub summoner_name: String,
    pub team_id: i32,
    pub champion_id: i32,
    pub champion_name: String,
    pub champion_mastery: i32,
}

impl Participant {
    /// Lowest mastery first, champion id breaking ties.
    pub fn sort_key(&self) -> (i32, i32) {
        (self.champion_mastery, self.champion_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchSummary, Participant};

    fn participant(champion_id: i32, champion_mastery: i32) -> Participant {
        Participant {
            summoner_id: champion_id as i64 * 10,
            summoner_name: format!("player-{champion_id}"),
            team_id: 100,
            champion_id,
            champion_name: format!("champ-{champion_id}"),
            champion_mastery,
        }
    }

    #[test]
    fn participants_sorted_by_mastery_then_champion() {
        let summary = MatchSummary::new(
            1,
            vec![
                participant(92, 6),
                participant(4, 2),
                participant(53, 6),
                participant(120, 3),
                participant(11, 6),
                participant(78, 3),
            ],
        );

        let order: Vec<_> = summary
            .participants
            .iter()
            .map(|p| (p.champion_mastery, p.champion_id))
            .collect();
        assert_eq!(order, vec![(2, 4), (3, 78), (3, 120), (6, 11), (6, 53), (6, 92)]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let summary = MatchSummary::new(3296743698, vec![participant(53, 6)]);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["gameId"], 3296743698u64);
        let p = &value["participants"][0];
        assert_eq!(p["summonerId"], 530);
        assert_eq!(p["summonerName"], "player-53");
        assert_eq!(p["teamId"], 100);
        assert_eq!(p["championId"], 53);
        assert_eq!(p["championName"], "champ-53");
        assert_eq!(p["championMastery"], 6);
    }
}
