//! Builds the enriched summary of a summoner's latest match.
//!
//! The upstream calls depend on each other, so the pipeline is a fixed chain
//! of stages, each consuming the output of the previous one:
//!
//! `AccountResolved -> LatestMatchFound -> MatchDetailFetched -> MatchSummary`
//!
//! Any failing stage aborts the whole request and no partial summary is ever
//! returned.

use std::sync::Arc;

use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, warn};

use crate::cache::ChampionCache;
use crate::error::AppError;
use crate::riot::{LolApi, MatchDto, Region};

pub mod models;

pub use models::{MatchSummary, Participant};

/// Participants enriched at the same time when not configured otherwise.
pub const DEFAULT_CONCURRENCY: usize = 10;

#[derive(Debug, Clone)]
pub struct AccountResolved {
    pub region: Region,
    pub summoner_name: String,
    pub account_id: i64,
}

#[derive(Debug, Clone)]
pub struct LatestMatchFound {
    pub region: Region,
    pub game_id: u64,
}

#[derive(Debug, Clone)]
pub struct MatchDetailFetched {
    pub region: Region,
    pub detail: MatchDto,
}

/// Identity of a participant joined with its stats record, before any
/// champion lookup.
#[derive(Debug, Clone)]
struct JoinedParticipant {
    summoner_id: i64,
    summoner_name: String,
    team_id: i32,
    champion_id: i32,
}

pub struct MatchEnricher<A: LolApi> {
    api: Arc<A>,
    cache: Arc<ChampionCache>,
    concurrency: usize,
}

impl<A: LolApi> MatchEnricher<A> {
    pub fn new(api: Arc<A>, cache: Arc<ChampionCache>) -> Self {
        Self {
            api,
            cache,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Bound the amount of participants enriched concurrently. `1` keeps every
    /// upstream call strictly sequential.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn cache(&self) -> &Arc<ChampionCache> {
        &self.cache
    }

    /// Run the whole pipeline for `summoner_name` on `region`.
    pub async fn latest_match(
        &self,
        region: Region,
        summoner_name: &str,
    ) -> Result<MatchSummary, AppError> {
        debug!("enriching latest match of {} in {}", summoner_name, region);

        let account = self.resolve_account(region, summoner_name).await?;
        let latest = self.find_latest_match(account).await?;
        let detail = self.fetch_match_detail(latest).await?;

        self.enrich(detail).await
    }

    pub async fn resolve_account(
        &self,
        region: Region,
        summoner_name: &str,
    ) -> Result<AccountResolved, AppError> {
        let account_id = self.api.get_account_id(region, summoner_name).await?;

        Ok(AccountResolved {
            region,
            summoner_name: summoner_name.to_string(),
            account_id,
        })
    }

    pub async fn find_latest_match(
        &self,
        account: AccountResolved,
    ) -> Result<LatestMatchFound, AppError> {
        let game_id = self
            .api
            .get_latest_match_id(account.region, account.account_id)
            .await?;
        debug!("{} latest match is {}", account.summoner_name, game_id);

        Ok(LatestMatchFound {
            region: account.region,
            game_id,
        })
    }

    pub async fn fetch_match_detail(
        &self,
        latest: LatestMatchFound,
    ) -> Result<MatchDetailFetched, AppError> {
        let detail = self.api.get_match(latest.region, latest.game_id).await?;

        Ok(MatchDetailFetched {
            region: latest.region,
            detail,
        })
    }

    /// Attach champion name and mastery to every participant and sort them.
    pub async fn enrich(&self, fetched: MatchDetailFetched) -> Result<MatchSummary, AppError> {
        let region = fetched.region;
        let joined = join_participants(&fetched.detail)?;

        let participants = stream::iter(joined)
            .map(|p| self.enrich_participant(region, p))
            .buffer_unordered(self.concurrency)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(MatchSummary::new(fetched.detail.game_id, participants))
    }

    async fn enrich_participant(
        &self,
        region: Region,
        joined: JoinedParticipant,
    ) -> Result<Participant, AppError> {
        let champion_name = self.champion_name(region, joined.champion_id).await?;
        let champion_mastery = self
            .api
            .get_champion_mastery(region, joined.champion_id, joined.summoner_id)
            .await?;

        Ok(Participant {
            summoner_id: joined.summoner_id,
            summoner_name: joined.summoner_name,
            team_id: joined.team_id,
            champion_id: joined.champion_id,
            champion_name,
            champion_mastery,
        })
    }

    /// Champion name from the cache, falling back to upstream on a miss.
    async fn champion_name(&self, region: Region, champion_id: i32) -> Result<String, AppError> {
        if let Some(name) = self.cache.lookup(champion_id).await {
            debug!("[CACHE] hit for champion {}", champion_id);
            return Ok(name);
        }

        let name = self.api.get_champion_name(region, champion_id).await?;

        if let Err(e) = self.cache.store(champion_id, &name).await {
            warn!("failed to persist champion {}: {}", champion_id, e);
        }

        Ok(name)
    }
}

/// Pair each participant identity with its stats record.
fn join_participants(detail: &MatchDto) -> Result<Vec<JoinedParticipant>, AppError> {
    detail
        .participant_identities
        .iter()
        .map(|identity| {
            let stats = detail.participant(identity.participant_id).ok_or_else(|| {
                AppError::Internal(format!(
                    "Participant {} of match {} has no stats record",
                    identity.participant_id, detail.game_id
                ))
            })?;

            Ok(JoinedParticipant {
                summoner_id: identity.player.summoner_id,
                summoner_name: identity.player.summoner_name.clone(),
                team_id: stats.team_id,
                champion_id: stats.champion_id,
            })
        })
        .collect()
}
