use serde::{Deserialize, Serialize};

use crate::match_result::MatchResult;

/// Stable player identifier (a Farcaster fid in the hosted deployment).
pub type PlayerId = u64;

/// Ranking points awarded for a win.
pub const WIN_REWARD: u32 = 3;
/// Ranking points taken for a loss. The score never drops below zero.
pub const LOSS_PENALTY: u32 = 3;

/// Display metadata submitted alongside every match result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub handle: String,
    pub display_name: String,
    pub avatar_ref: String,
}

/// Accumulated per-player statistics, one record per player.
///
/// Serialized with the field names used by the persisted records
/// (`fid`, `username`, `points`, ...), so existing store contents stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(rename = "fid")]
    pub id: PlayerId,
    #[serde(rename = "username")]
    pub handle: String,
    pub display_name: String,
    #[serde(rename = "pfpUrl")]
    pub avatar_ref: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    #[serde(rename = "points")]
    pub ranking_score: u32,
    /// Epoch milliseconds of the most recent recorded match.
    #[serde(rename = "lastPlayed")]
    pub last_active_at: u64,
}

impl PlayerStats {
    /// Zeroed record for a player seen for the first time.
    pub fn baseline(profile: &PlayerProfile) -> Self {
        Self {
            id: profile.id,
            handle: profile.handle.clone(),
            display_name: profile.display_name.clone(),
            avatar_ref: profile.avatar_ref.clone(),
            games_played: 0,
            wins: 0,
            losses: 0,
            goals_scored: 0,
            goals_conceded: 0,
            ranking_score: 0,
            last_active_at: 0,
        }
    }

    /// Overwrite display metadata with the latest submitted values.
    fn refresh_profile(&mut self, profile: &PlayerProfile) {
        self.id = profile.id;
        self.handle.clone_from(&profile.handle);
        self.display_name.clone_from(&profile.display_name);
        self.avatar_ref.clone_from(&profile.avatar_ref);
    }

    pub fn record_win(&mut self, scored: u32, conceded: u32, at: u64) {
        self.games_played = self.games_played.saturating_add(1);
        self.wins = self.wins.saturating_add(1);
        self.goals_scored = self.goals_scored.saturating_add(scored);
        self.goals_conceded = self.goals_conceded.saturating_add(conceded);
        self.ranking_score = self.ranking_score.saturating_add(WIN_REWARD);
        self.last_active_at = at;
    }

    pub fn record_loss(&mut self, scored: u32, conceded: u32, at: u64) {
        self.games_played = self.games_played.saturating_add(1);
        self.losses = self.losses.saturating_add(1);
        self.goals_scored = self.goals_scored.saturating_add(scored);
        self.goals_conceded = self.goals_conceded.saturating_add(conceded);
        self.ranking_score = self.ranking_score.saturating_sub(LOSS_PENALTY);
        self.last_active_at = at;
    }
}

/// Fold one match result into the winner's and loser's records.
///
/// `None` means the player has no record yet and starts from
/// [`PlayerStats::baseline`]. Returns `(winner, loser)`; writing them back is
/// the caller's job.
pub fn apply_match_result(
    result: &MatchResult,
    current_winner: Option<&PlayerStats>,
    current_loser: Option<&PlayerStats>,
) -> (PlayerStats, PlayerStats) {
    let winner = &result.winner;
    let loser = &result.loser;

    let mut winner_stats = current_winner
        .cloned()
        .unwrap_or_else(|| PlayerStats::baseline(&winner.profile));
    winner_stats.refresh_profile(&winner.profile);
    winner_stats.record_win(winner.score, loser.score, result.submitted_at);

    let mut loser_stats = current_loser
        .cloned()
        .unwrap_or_else(|| PlayerStats::baseline(&loser.profile));
    loser_stats.refresh_profile(&loser.profile);
    loser_stats.record_loss(loser.score, winner.score, result.submitted_at);

    (winner_stats, loser_stats)
}
