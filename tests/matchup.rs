//! Unit tests for per-opponent matchup statistics.

use decklog_server::stats::matchup::{deck_matchups, MatchupRow, LIST_CAP, MIN_ENCOUNTERS};
use decklog_server::stats::MatchResult;
use uuid::Uuid;

/// One encounter against `name` (a fresh match, opponent at seat 2).
fn encounter(result: MatchResult, name: &str) -> MatchupRow {
    MatchupRow {
        match_id: Uuid::new_v4(),
        result,
        seat: 2,
        commander: name.to_string(),
    }
}

fn encounters(wins: usize, losses: usize, name: &str) -> Vec<MatchupRow> {
    let mut rows = Vec::new();
    for _ in 0..wins {
        rows.push(encounter(MatchResult::Win, name));
    }
    for _ in 0..losses {
        rows.push(encounter(MatchResult::Loss, name));
    }
    rows
}

#[test]
fn below_threshold_signatures_are_dropped() {
    // 2 encounters < MIN_ENCOUNTERS
    let rows = encounters(2, 0, "Rare Opponent");
    assert!((MIN_ENCOUNTERS as usize) > 2);

    let report = deck_matchups(&rows, 40.0);
    assert!(report.favorable.is_empty());
    assert!(report.nemesis.is_empty());
}

#[test]
fn fifty_percent_against_forty_average_is_favorable() {
    // 5 wins, 5 losses against the same pairing; deck average 40%.
    let mut rows = Vec::new();
    for i in 0..10 {
        let result = if i < 5 {
            MatchResult::Win
        } else {
            MatchResult::Loss
        };
        let match_id = Uuid::new_v4();
        // Pairing recorded in both orders across matches.
        let (first, second) = if i % 2 == 0 {
            ("Alpha", "Zeta")
        } else {
            ("Zeta", "Alpha")
        };
        rows.push(MatchupRow {
            match_id,
            result,
            seat: 3,
            commander: first.to_string(),
        });
        rows.push(MatchupRow {
            match_id,
            result,
            seat: 3,
            commander: second.to_string(),
        });
    }

    let report = deck_matchups(&rows, 40.0);
    assert!(report.nemesis.is_empty());
    assert_eq!(report.favorable.len(), 1);
    let entry = &report.favorable[0];
    assert_eq!(entry.signature, "Alpha / Zeta");
    assert_eq!(entry.games, 10);
    assert_eq!(entry.wins, 5);
    assert_eq!(entry.losses, 5);
    assert_eq!(entry.win_rate, 50.0);
}

#[test]
fn rate_equal_to_average_lands_in_neither_list() {
    // 2 wins out of 4 = 50.0, exactly the deck average.
    let rows = encounters(2, 2, "Mirror");
    let report = deck_matchups(&rows, 50.0);
    assert!(report.favorable.is_empty());
    assert!(report.nemesis.is_empty());
}

#[test]
fn nemesis_sorted_worst_first_and_capped() {
    // Six signatures below a 90% average, win rates 0/6 .. 5/6.
    let mut rows = Vec::new();
    for (i, name) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
        rows.extend(encounters(i, 6 - i, name));
    }

    let report = deck_matchups(&rows, 90.0);
    assert_eq!(report.nemesis.len(), LIST_CAP);
    let rates: Vec<f64> = report.nemesis.iter().map(|e| e.win_rate).collect();
    let mut sorted = rates.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(rates, sorted, "worst matchup first");
    // The best of the six (5/6) is the one cut off.
    assert!(report.nemesis.iter().all(|e| e.signature != "F"));
}

#[test]
fn favorable_sorted_best_first() {
    let mut rows = encounters(3, 1, "Good"); // 75.0
    rows.extend(encounters(4, 0, "Great")); // 100.0
    rows.extend(encounters(2, 2, "Fine")); // 50.0

    let report = deck_matchups(&rows, 10.0);
    let names: Vec<&str> = report
        .favorable
        .iter()
        .map(|e| e.signature.as_str())
        .collect();
    assert_eq!(names, vec!["Great", "Good", "Fine"]);
}

#[test]
fn draws_count_as_games_but_not_wins() {
    // 1 win, 2 draws = 33.3% over 3 games.
    let mut rows = vec![encounter(MatchResult::Win, "Grindy")];
    rows.push(encounter(MatchResult::Draw, "Grindy"));
    rows.push(encounter(MatchResult::Draw, "Grindy"));

    let report = deck_matchups(&rows, 50.0);
    assert_eq!(report.nemesis.len(), 1);
    let entry = &report.nemesis[0];
    assert_eq!(entry.games, 3);
    assert_eq!(entry.wins, 1);
    assert_eq!(entry.losses, 0);
    assert_eq!(entry.win_rate, 33.3);
}
