//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::AppState;
use crate::enricher::MatchSummary;
use crate::error::AppError;
use crate::riot::{LolApi, Region};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GameDataParams {
    pub region: Option<String>,
    pub summoner: Option<String>,
}

impl GameDataParams {
    /// Pick the known keys out of the raw query pairs. The first occurrence of
    /// a repeated key wins and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "region" => &mut params.region,
                "summoner" => &mut params.summoner,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

/// Handle GET /gamedata endpoint.
///
/// Returns the latest match of `summoner` on `region` with every participant
/// enriched with champion name and mastery.
pub async fn handle_gamedata<A: LolApi + 'static>(
    State(state): State<Arc<AppState<A>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MatchSummary>, AppError> {
    let params = GameDataParams::from_pairs(pairs);
    let region = required(params.region, "Region")?;
    let summoner = required(params.summoner, "Summoner")?;
    let region: Region = region.parse()?;

    tracing::debug!("Handling gamedata request for {} in {}", summoner, region);

    let summary = state.enricher().latest_match(region, &summoner).await?;

    Ok(Json(summary))
}

/// Empty values are treated like missing ones.
fn required(value: Option<String>, name: &'static str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingParameter(name))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: ErrorStatus,
}

#[derive(Debug, Serialize)]
struct ErrorStatus {
    message: String,
    status_code: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::debug!("request rejected: {}", self);
        }

        let body = ErrorBody {
            status: ErrorStatus {
                message: self.to_string(),
                status_code: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}
