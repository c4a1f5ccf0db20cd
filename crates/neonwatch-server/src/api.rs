use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use neonwatch_core::{MatchResult, MatchSide, Period, PlayerId, PlayerProfile, PlayerStats};

use crate::error::AppError;
use crate::repository::NotificationDetails;
use crate::state::AppState;

/// Body of `POST /api/game-result`. Every field is required; they are
/// optional here so a missing one can be reported by name.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSubmission {
    pub winner_fid: Option<PlayerId>,
    pub loser_fid: Option<PlayerId>,
    pub winner_username: Option<String>,
    pub loser_username: Option<String>,
    pub winner_score: Option<u32>,
    pub loser_score: Option<u32>,
    pub winner_display_name: Option<String>,
    pub loser_display_name: Option<String>,
    pub winner_pfp_url: Option<String>,
    pub loser_pfp_url: Option<String>,
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {field}")))
}

impl MatchSubmission {
    /// Check required fields (first missing one wins) and build the result.
    pub fn into_result(self, submitted_at: u64) -> Result<MatchResult, AppError> {
        let winner_fid = require(self.winner_fid, "winnerFid")?;
        let loser_fid = require(self.loser_fid, "loserFid")?;
        let winner_username = require(self.winner_username, "winnerUsername")?;
        let loser_username = require(self.loser_username, "loserUsername")?;
        let winner_score = require(self.winner_score, "winnerScore")?;
        let loser_score = require(self.loser_score, "loserScore")?;
        let winner_display_name = require(self.winner_display_name, "winnerDisplayName")?;
        let loser_display_name = require(self.loser_display_name, "loserDisplayName")?;
        let winner_pfp_url = require(self.winner_pfp_url, "winnerPfpUrl")?;
        let loser_pfp_url = require(self.loser_pfp_url, "loserPfpUrl")?;

        Ok(MatchResult {
            winner: MatchSide {
                profile: PlayerProfile {
                    id: winner_fid,
                    handle: winner_username,
                    display_name: winner_display_name,
                    avatar_ref: winner_pfp_url,
                },
                score: winner_score,
            },
            loser: MatchSide {
                profile: PlayerProfile {
                    id: loser_fid,
                    handle: loser_username,
                    display_name: loser_display_name,
                    avatar_ref: loser_pfp_url,
                },
                score: loser_score,
            },
            submitted_at,
        })
    }
}

/// Generic success acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /api/game-result: fold a finished match into both players' stats.
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn post_game_result(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, AppError> {
    let submission: MatchSubmission = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;
    let result = submission.into_result(neonwatch_core::time::now_millis())?;

    state
        .repository
        .record_match(&result)
        .await
        .map_err(AppError::from_store("Failed to save game result"))?;

    Ok(Json(SuccessResponse {
        success: true,
        message: Some("Game result saved successfully"),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub period: Period,
    pub leaderboard: Vec<PlayerStats>,
}

/// Resolve the `period` query value; absent or empty means 30 days.
fn parse_period(raw: Option<&str>) -> Result<Period, AppError> {
    match raw.filter(|p| !p.is_empty()) {
        None => Ok(Period::default()),
        Some(p) => p
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid period. Must be 1d, 7d, or 30d".to_string())),
    }
}

/// GET /api/leaderboard?period=1d|7d|30d
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let period = parse_period(query.period.as_deref())?;

    let leaderboard = state
        .repository
        .leaderboard(period, neonwatch_core::time::now_millis())
        .await
        .map_err(AppError::from_store("Failed to fetch leaderboard"))?;

    Ok(Json(LeaderboardResponse {
        success: true,
        period,
        leaderboard,
    }))
}

/// GET /api/notifications/{fid}
pub async fn get_notifications(
    State(state): State<AppState>,
    Path(fid): Path<PlayerId>,
) -> Result<Json<NotificationDetails>, AppError> {
    state
        .repository
        .get_notification_details(fid)
        .await
        .map_err(AppError::from_store("Failed to fetch notification details"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No notification details for {fid}")))
}

/// PUT /api/notifications/{fid}
pub async fn put_notifications(
    State(state): State<AppState>,
    Path(fid): Path<PlayerId>,
    payload: Result<Json<NotificationDetails>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(details) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    state
        .repository
        .set_notification_details(fid, &details)
        .await
        .map_err(AppError::from_store("Failed to save notification details"))?;
    Ok(Json(SuccessResponse {
        success: true,
        message: None,
    }))
}

/// DELETE /api/notifications/{fid}
pub async fn delete_notifications(
    State(state): State<AppState>,
    Path(fid): Path<PlayerId>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .repository
        .delete_notification_details(fid)
        .await
        .map_err(AppError::from_store("Failed to delete notification details"))?;
    Ok(Json(SuccessResponse {
        success: true,
        message: None,
    }))
}
