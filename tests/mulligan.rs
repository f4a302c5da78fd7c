//! Unit tests for mulligan grouping and labels.

use decklog_server::stats::mulligan::{deck_mulligans, mulligan_label, MulliganRow, FREE_MULLIGAN};
use decklog_server::stats::MatchResult;

#[test]
fn label_mapping() {
    assert_eq!(mulligan_label(FREE_MULLIGAN), "Free (to 7)");
    assert_eq!(mulligan_label(0), "Keep First 7");
    assert_eq!(mulligan_label(2), "To 5 (2)");
    assert_eq!(mulligan_label(4), "To 3 (4)");
}

#[test]
fn groups_sorted_free_first_then_ascending() {
    let rows = vec![
        MulliganRow {
            result: MatchResult::Win,
            mulligans: 2,
        },
        MulliganRow {
            result: MatchResult::Loss,
            mulligans: 0,
        },
        MulliganRow {
            result: MatchResult::Win,
            mulligans: FREE_MULLIGAN,
        },
        MulliganRow {
            result: MatchResult::Loss,
            mulligans: 1,
        },
    ];

    let entries = deck_mulligans(&rows);
    let order: Vec<i32> = entries.iter().map(|e| e.mulligans).collect();
    assert_eq!(order, vec![-1, 0, 1, 2]);
}

#[test]
fn per_group_win_rate() {
    let mut rows = Vec::new();
    for _ in 0..2 {
        rows.push(MulliganRow {
            result: MatchResult::Win,
            mulligans: 0,
        });
    }
    rows.push(MulliganRow {
        result: MatchResult::Loss,
        mulligans: 0,
    });
    rows.push(MulliganRow {
        result: MatchResult::Draw,
        mulligans: 0,
    });

    let entries = deck_mulligans(&rows);
    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert_eq!(e.label, "Keep First 7");
    assert_eq!(e.games, 4);
    assert_eq!(e.wins, 2);
    assert_eq!(e.win_rate, 50.0);
}

#[test]
fn no_rows_yields_no_groups() {
    assert!(deck_mulligans(&[]).is_empty());
}
