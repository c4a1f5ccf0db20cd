use serde::{Deserialize, Serialize};

use crate::stats::PlayerProfile;

/// One participant's side of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSide {
    pub profile: PlayerProfile,
    pub score: u32,
}

/// A finished match as submitted by the game host. Never stored directly;
/// it only feeds the two per-player records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: MatchSide,
    pub loser: MatchSide,
    /// Epoch milliseconds at which the server accepted the result.
    pub submitted_at: u64,
}
