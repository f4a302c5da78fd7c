//! Overall performance summary for one user.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::stats::signature::signatures_by_seat;
use crate::stats::types::{win_rate, MatchResult, OpponentRow, SEAT_MAX, SEAT_MIN};

/// A deck needs this many matches before it can be "winningest".
pub const WINNINGEST_MIN_GAMES: i64 = 10;
/// Most-faced signatures kept in the summary.
pub const TOP_OPPONENTS_CAP: usize = 10;

/// One active logged match with the deck it was played with.
#[derive(Debug, Clone)]
pub struct SummaryMatchRow {
    pub match_id: Uuid,
    pub deck_id: Uuid,
    pub deck_name: String,
    pub result: MatchResult,
    pub seat: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeatStats {
    pub seat: i32,
    pub games: i64,
    pub wins: i64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeckHighlight {
    pub deck_id: Uuid,
    pub name: String,
    pub games: i64,
    pub wins: i64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacedSignature {
    pub signature: String,
    pub encounters: i64,
}

#[derive(Debug, Serialize)]
pub struct PerformanceSummary {
    pub total_matches: i64,
    pub total_wins: i64,
    pub win_rate: f64,
    /// Always four entries, seats 1–4; zeroed when never played.
    pub seats: Vec<SeatStats>,
    pub most_played: Option<DeckHighlight>,
    pub winningest: Option<DeckHighlight>,
    /// Most-faced signatures, count descending, ties by name.
    pub top_opponents: Vec<FacedSignature>,
}

/// Aggregate a user's active matches. Zero matches yields the zeroed
/// summary, never a division error.
pub fn performance_summary(
    matches: &[SummaryMatchRow],
    opponents: &[OpponentRow],
) -> PerformanceSummary {
    let total_matches = matches.len() as i64;
    let total_wins = matches
        .iter()
        .filter(|m| m.result == MatchResult::Win)
        .count() as i64;

    let seats = (SEAT_MIN..=SEAT_MAX)
        .map(|seat| {
            let games = matches.iter().filter(|m| m.seat == seat).count() as i64;
            let wins = matches
                .iter()
                .filter(|m| m.seat == seat && m.result == MatchResult::Win)
                .count() as i64;
            SeatStats {
                seat,
                games,
                wins,
                win_rate: win_rate(wins, games),
            }
        })
        .collect();

    // Per-deck tallies keyed by id; names travel alongside for tie-breaks.
    let mut decks: BTreeMap<Uuid, (String, i64, i64)> = BTreeMap::new();
    for m in matches {
        let entry = decks
            .entry(m.deck_id)
            .or_insert_with(|| (m.deck_name.clone(), 0, 0));
        entry.1 += 1;
        if m.result == MatchResult::Win {
            entry.2 += 1;
        }
    }
    let highlights: Vec<DeckHighlight> = decks
        .into_iter()
        .map(|(deck_id, (name, games, wins))| DeckHighlight {
            deck_id,
            name,
            games,
            wins,
            win_rate: win_rate(wins, games),
        })
        .collect();

    let most_played = highlights
        .iter()
        .min_by(|a, b| b.games.cmp(&a.games).then_with(|| a.name.cmp(&b.name)))
        .cloned();
    let winningest = highlights
        .iter()
        .filter(|d| d.games >= WINNINGEST_MIN_GAMES)
        .min_by(|a, b| {
            b.win_rate
                .partial_cmp(&a.win_rate)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        })
        .cloned();

    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for signature in signatures_by_seat(opponents).into_values() {
        *counts.entry(signature).or_default() += 1;
    }
    let mut top_opponents: Vec<FacedSignature> = counts
        .into_iter()
        .map(|(signature, encounters)| FacedSignature {
            signature,
            encounters,
        })
        .collect();
    top_opponents.sort_by(|a, b| {
        b.encounters
            .cmp(&a.encounters)
            .then_with(|| a.signature.cmp(&b.signature))
    });
    top_opponents.truncate(TOP_OPPONENTS_CAP);

    PerformanceSummary {
        total_matches,
        total_wins,
        win_rate: win_rate(total_wins, total_matches),
        seats,
        most_played,
        winningest,
        top_opponents,
    }
}
