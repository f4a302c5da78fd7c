//! Unit tests for the overall performance summary.

use decklog_server::stats::summary::{
    performance_summary, SummaryMatchRow, TOP_OPPONENTS_CAP, WINNINGEST_MIN_GAMES,
};
use decklog_server::stats::{MatchResult, OpponentRow};
use uuid::Uuid;

fn play(deck_id: Uuid, deck_name: &str, result: MatchResult, seat: i32) -> SummaryMatchRow {
    SummaryMatchRow {
        match_id: Uuid::new_v4(),
        deck_id,
        deck_name: deck_name.to_string(),
        result,
        seat,
    }
}

#[test]
fn zero_matches_yields_zeroed_summary() {
    let summary = performance_summary(&[], &[]);
    assert_eq!(summary.total_matches, 0);
    assert_eq!(summary.total_wins, 0);
    assert_eq!(summary.win_rate, 0.0);
    assert_eq!(summary.seats.len(), 4);
    for seat in &summary.seats {
        assert_eq!(seat.games, 0);
        assert_eq!(seat.win_rate, 0.0);
    }
    assert!(summary.most_played.is_none());
    assert!(summary.winningest.is_none());
    assert!(summary.top_opponents.is_empty());
}

#[test]
fn totals_and_seat_breakdown() {
    let deck = Uuid::new_v4();
    let matches = vec![
        play(deck, "Mono Blue", MatchResult::Win, 1),
        play(deck, "Mono Blue", MatchResult::Loss, 1),
        play(deck, "Mono Blue", MatchResult::Win, 3),
        play(deck, "Mono Blue", MatchResult::Draw, 3),
    ];

    let summary = performance_summary(&matches, &[]);
    assert_eq!(summary.total_matches, 4);
    assert_eq!(summary.total_wins, 2);
    assert_eq!(summary.win_rate, 50.0);

    let seat1 = &summary.seats[0];
    assert_eq!((seat1.seat, seat1.games, seat1.wins), (1, 2, 1));
    assert_eq!(seat1.win_rate, 50.0);
    let seat2 = &summary.seats[1];
    assert_eq!((seat2.seat, seat2.games), (2, 0));
    assert_eq!(seat2.win_rate, 0.0);
}

#[test]
fn most_played_breaks_count_ties_by_name() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let matches = vec![
        play(a, "Zur", MatchResult::Win, 1),
        play(a, "Zur", MatchResult::Loss, 2),
        play(b, "Atraxa", MatchResult::Loss, 1),
        play(b, "Atraxa", MatchResult::Loss, 2),
    ];

    let summary = performance_summary(&matches, &[]);
    let most = summary.most_played.expect("two decks played");
    assert_eq!(most.name, "Atraxa");
    assert_eq!(most.games, 2);
}

#[test]
fn winningest_requires_minimum_games() {
    let small = Uuid::new_v4();
    let big = Uuid::new_v4();
    let mut matches = Vec::new();
    // 3-0 deck: perfect rate but below the floor.
    for _ in 0..3 {
        matches.push(play(small, "Glass Cannon", MatchResult::Win, 1));
    }
    // 6-4 deck with exactly WINNINGEST_MIN_GAMES matches.
    for i in 0..WINNINGEST_MIN_GAMES {
        let result = if i < 6 {
            MatchResult::Win
        } else {
            MatchResult::Loss
        };
        matches.push(play(big, "Warhorse", result, 2));
    }

    let summary = performance_summary(&matches, &[]);
    let winningest = summary.winningest.expect("one deck qualifies");
    assert_eq!(winningest.name, "Warhorse");
    assert_eq!(winningest.win_rate, 60.0);
}

#[test]
fn top_opponents_counted_and_tie_broken_by_name() {
    let deck = Uuid::new_v4();
    let mut matches = Vec::new();
    let mut opponents = Vec::new();

    // Three matches vs Beta, three vs Alpha, one vs Omega.
    for name in ["Beta", "Beta", "Beta", "Alpha", "Alpha", "Alpha", "Omega"] {
        let row = play(deck, "Mono Blue", MatchResult::Loss, 1);
        opponents.push(OpponentRow {
            match_id: row.match_id,
            seat: 2,
            commander: name.to_string(),
        });
        matches.push(row);
    }

    let summary = performance_summary(&matches, &opponents);
    assert!(summary.top_opponents.len() <= TOP_OPPONENTS_CAP);
    let names: Vec<&str> = summary
        .top_opponents
        .iter()
        .map(|f| f.signature.as_str())
        .collect();
    // Equal counts: Alpha before Beta.
    assert_eq!(names, vec!["Alpha", "Beta", "Omega"]);
    assert_eq!(summary.top_opponents[0].encounters, 3);
    assert_eq!(summary.top_opponents[2].encounters, 1);
}

#[test]
fn paired_opponents_count_as_one_signature() {
    let deck = Uuid::new_v4();
    let mut matches = Vec::new();
    let mut opponents = Vec::new();
    for _ in 0..2 {
        let row = play(deck, "Mono Blue", MatchResult::Win, 1);
        for name in ["Zeta", "Alpha"] {
            opponents.push(OpponentRow {
                match_id: row.match_id,
                seat: 4,
                commander: name.to_string(),
            });
        }
        matches.push(row);
    }

    let summary = performance_summary(&matches, &opponents);
    assert_eq!(summary.top_opponents.len(), 1);
    assert_eq!(summary.top_opponents[0].signature, "Alpha / Zeta");
    assert_eq!(summary.top_opponents[0].encounters, 2);
}
