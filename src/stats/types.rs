//! Shared row and result types for the stats modules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a logged match. Closed set of three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// Parse the TEXT column value; anything else is a corrupt row.
    pub fn parse(s: &str) -> Option<MatchResult> {
        match s {
            "WIN" => Some(MatchResult::Win),
            "LOSS" => Some(MatchResult::Loss),
            "DRAW" => Some(MatchResult::Draw),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchResult::Win => "WIN",
            MatchResult::Loss => "LOSS",
            MatchResult::Draw => "DRAW",
        }
    }
}

pub const SEAT_MIN: i32 = 1;
pub const SEAT_MAX: i32 = 4;

/// One opposing commander in one match: which seat it occupied and its name.
#[derive(Debug, Clone)]
pub struct OpponentRow {
    pub match_id: Uuid,
    pub seat: i32,
    pub commander: String,
}

/// wins / games * 100, one decimal. Total: 0.0 when there are no games.
pub fn win_rate(wins: i64, games: i64) -> f64 {
    if games == 0 {
        return 0.0;
    }
    (wins as f64 * 1000.0 / games as f64).round() / 10.0
}
