//! Canonical opponent signatures.
//!
//! One opposing seat may hold several paired commanders; grouping by "who
//! was faced" needs a key that ignores the order the pairing was recorded
//! in. Sorting the names byte-wise and joining with a fixed separator gives
//! a stable key such as `"Alpha / Beta"`.

use std::collections::BTreeMap;
use uuid::Uuid;

use crate::stats::types::OpponentRow;

pub const SEPARATOR: &str = " / ";

/// Signature for the commanders at one seat. A lone commander yields its
/// bare name.
pub fn seat_signature(mut names: Vec<String>) -> String {
    names.sort();
    names.join(SEPARATOR)
}

/// Collapse opponent rows into one signature per (match, seat).
pub fn signatures_by_seat(rows: &[OpponentRow]) -> BTreeMap<(Uuid, i32), String> {
    let mut names: BTreeMap<(Uuid, i32), Vec<String>> = BTreeMap::new();
    for row in rows {
        names
            .entry((row.match_id, row.seat))
            .or_default()
            .push(row.commander.clone());
    }
    names
        .into_iter()
        .map(|(key, n)| (key, seat_signature(n)))
        .collect()
}
