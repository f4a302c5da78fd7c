//! Win rate grouped by mulligans taken.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::stats::types::{win_rate, MatchResult};

/// Sentinel: a free mulligan back to a full seven cards.
pub const FREE_MULLIGAN: i32 = -1;

/// One match with a logged mulligan count. Matches where the count was not
/// logged are filtered out before this layer.
#[derive(Debug, Clone)]
pub struct MulliganRow {
    pub result: MatchResult,
    pub mulligans: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MulliganEntry {
    pub mulligans: i32,
    pub label: String,
    pub games: i64,
    pub wins: i64,
    pub win_rate: f64,
}

/// Display label for a mulligan count.
pub fn mulligan_label(n: i32) -> String {
    match n {
        FREE_MULLIGAN => "Free (to 7)".to_string(),
        0 => "Keep First 7".to_string(),
        n => format!("To {} ({})", 7 - n, n),
    }
}

/// Group rows by mulligan count, free mulligan first, then 0, then
/// ascending.
pub fn deck_mulligans(rows: &[MulliganRow]) -> Vec<MulliganEntry> {
    let mut groups: BTreeMap<i32, (i64, i64)> = BTreeMap::new();
    for row in rows {
        let (games, wins) = groups.entry(row.mulligans).or_default();
        *games += 1;
        if row.result == MatchResult::Win {
            *wins += 1;
        }
    }

    groups
        .into_iter()
        .map(|(mulligans, (games, wins))| MulliganEntry {
            mulligans,
            label: mulligan_label(mulligans),
            games,
            wins,
            win_rate: win_rate(wins, games),
        })
        .collect()
}
