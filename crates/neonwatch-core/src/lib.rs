pub mod leaderboard;
pub mod match_result;
pub mod stats;
pub mod time;

pub use leaderboard::{ParsePeriodError, Period, build_leaderboard};
pub use match_result::{MatchResult, MatchSide};
pub use stats::{PlayerId, PlayerProfile, PlayerStats, apply_match_result};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::match_result::{MatchResult, MatchSide};
    use crate::stats::{PlayerId, PlayerProfile, PlayerStats};

    /// Create a profile with handle `player{id}`.
    pub fn make_profile(id: PlayerId) -> PlayerProfile {
        PlayerProfile {
            id,
            handle: format!("player{id}"),
            display_name: format!("Player {id}"),
            avatar_ref: format!("https://example.com/pfp/{id}.png"),
        }
    }

    /// Create a match result between two generated profiles.
    pub fn make_result(
        winner: PlayerId,
        loser: PlayerId,
        winner_score: u32,
        loser_score: u32,
        submitted_at: u64,
    ) -> MatchResult {
        MatchResult {
            winner: MatchSide {
                profile: make_profile(winner),
                score: winner_score,
            },
            loser: MatchSide {
                profile: make_profile(loser),
                score: loser_score,
            },
            submitted_at,
        }
    }

    /// Create a stats record with only the ranking score and activity time set.
    pub fn make_stats(id: PlayerId, ranking_score: u32, last_active_at: u64) -> PlayerStats {
        PlayerStats {
            ranking_score,
            last_active_at,
            ..PlayerStats::baseline(&make_profile(id))
        }
    }
}
