//! Per-opponent matchup statistics for one deck.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::stats::signature::seat_signature;
use crate::stats::types::{win_rate, MatchResult};

/// Signatures faced fewer times than this carry no signal.
pub const MIN_ENCOUNTERS: i64 = 3;
/// Entries kept per list.
pub const LIST_CAP: usize = 5;

/// One (match, opposing commander) row for the deck under analysis.
#[derive(Debug, Clone)]
pub struct MatchupRow {
    pub match_id: Uuid,
    pub result: MatchResult,
    pub seat: i32,
    pub commander: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchupEntry {
    pub signature: String,
    pub games: i64,
    pub wins: i64,
    pub losses: i64,
    pub win_rate: f64,
}

/// Opponents the deck beats more / less often than its own average.
#[derive(Debug, Serialize)]
pub struct MatchupReport {
    /// Best win rate first.
    pub favorable: Vec<MatchupEntry>,
    /// Worst win rate first.
    pub nemesis: Vec<MatchupEntry>,
}

#[derive(Default)]
struct Tally {
    games: i64,
    wins: i64,
    losses: i64,
}

/// Group the deck's matches by opponent signature and split them around
/// `deck_average` (the deck's overall win rate, precomputed by the caller).
/// Signatures whose rate equals the average land in neither list.
pub fn deck_matchups(rows: &[MatchupRow], deck_average: f64) -> MatchupReport {
    // One encounter per (match, seat); multi-commander seats collapse into
    // a single sorted-name signature.
    let mut seats: BTreeMap<(Uuid, i32), (MatchResult, Vec<String>)> = BTreeMap::new();
    for row in rows {
        seats
            .entry((row.match_id, row.seat))
            .or_insert_with(|| (row.result, Vec::new()))
            .1
            .push(row.commander.clone());
    }

    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for (result, names) in seats.into_values() {
        let tally = tallies.entry(seat_signature(names)).or_default();
        tally.games += 1;
        match result {
            MatchResult::Win => tally.wins += 1,
            MatchResult::Loss => tally.losses += 1,
            MatchResult::Draw => {}
        }
    }

    let mut favorable = Vec::new();
    let mut nemesis = Vec::new();
    for (signature, tally) in tallies {
        if tally.games < MIN_ENCOUNTERS {
            continue;
        }
        let entry = MatchupEntry {
            signature,
            games: tally.games,
            wins: tally.wins,
            losses: tally.losses,
            win_rate: win_rate(tally.wins, tally.games),
        };
        if entry.win_rate < deck_average {
            nemesis.push(entry);
        } else if entry.win_rate > deck_average {
            favorable.push(entry);
        }
    }

    nemesis.sort_by(|a, b| {
        a.win_rate
            .partial_cmp(&b.win_rate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.signature.cmp(&b.signature))
    });
    favorable.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.signature.cmp(&b.signature))
    });
    nemesis.truncate(LIST_CAP);
    favorable.truncate(LIST_CAP);

    MatchupReport { favorable, nemesis }
}
