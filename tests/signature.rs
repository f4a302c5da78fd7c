//! Unit tests for opponent-signature canonicalisation.

use decklog_server::stats::signature::{seat_signature, signatures_by_seat};
use decklog_server::stats::OpponentRow;
use uuid::Uuid;

#[test]
fn single_commander_yields_bare_name() {
    assert_eq!(seat_signature(vec!["Atraxa".to_string()]), "Atraxa");
}

#[test]
fn signature_is_order_independent() {
    let a = seat_signature(vec!["Zeta".to_string(), "Alpha".to_string()]);
    let b = seat_signature(vec!["Alpha".to_string(), "Zeta".to_string()]);
    assert_eq!(a, "Alpha / Zeta");
    assert_eq!(a, b);
}

#[test]
fn sort_is_bytewise() {
    // 'Z' < 'a' in byte order; no locale collation.
    let sig = seat_signature(vec!["alpha".to_string(), "Zeta".to_string()]);
    assert_eq!(sig, "Zeta / alpha");
}

#[test]
fn rows_collapse_per_match_and_seat() {
    let m1 = Uuid::new_v4();
    let m2 = Uuid::new_v4();
    let rows = vec![
        OpponentRow {
            match_id: m1,
            seat: 2,
            commander: "Zeta".to_string(),
        },
        OpponentRow {
            match_id: m1,
            seat: 2,
            commander: "Alpha".to_string(),
        },
        OpponentRow {
            match_id: m1,
            seat: 3,
            commander: "Gamma".to_string(),
        },
        OpponentRow {
            match_id: m2,
            seat: 2,
            commander: "Alpha".to_string(),
        },
        OpponentRow {
            match_id: m2,
            seat: 2,
            commander: "Zeta".to_string(),
        },
    ];

    let sigs = signatures_by_seat(&rows);
    assert_eq!(sigs.len(), 3);
    assert_eq!(sigs[&(m1, 2)], "Alpha / Zeta");
    assert_eq!(sigs[&(m1, 3)], "Gamma");
    // Same pairing recorded in the opposite order in another match.
    assert_eq!(sigs[&(m2, 2)], "Alpha / Zeta");
}
