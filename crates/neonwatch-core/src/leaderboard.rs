use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::stats::PlayerStats;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

/// Trailing activity window used to filter leaderboard eligibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::OneDay, Period::SevenDays, Period::ThirtyDays];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }

    /// Window length in milliseconds.
    pub fn window_ms(self) -> u64 {
        match self {
            Self::OneDay => DAY_MS,
            Self::SevenDays => 7 * DAY_MS,
            Self::ThirtyDays => 30 * DAY_MS,
        }
    }

    /// Oldest `last_active_at` still inside the window ending at `now`.
    pub fn cutoff(self, now: u64) -> u64 {
        now.saturating_sub(self.window_ms())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a period string is not one of `1d`, `7d`, `30d`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid period {0:?}: must be 1d, 7d, or 30d")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePeriodError(s.to_string()))
    }
}

/// Filter records to those active within `period` of `now`, ranked by
/// descending ranking score.
///
/// The sort is stable, so players with equal scores keep the order in which
/// they were supplied.
pub fn build_leaderboard(
    records: impl IntoIterator<Item = PlayerStats>,
    period: Period,
    now: u64,
) -> Vec<PlayerStats> {
    let cutoff = period.cutoff(now);
    let mut board: Vec<PlayerStats> = records
        .into_iter()
        .filter(|s| s.last_active_at >= cutoff)
        .collect();
    board.sort_by(|a, b| b.ranking_score.cmp(&a.ranking_score));
    board
}
