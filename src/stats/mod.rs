//! Pure win-rate aggregation over logged-match rows.
//!
//! Repos fetch flat rows; everything here is deterministic and testable
//! without a database.

pub mod matchup;
pub mod mulligan;
pub mod signature;
pub mod summary;
pub mod types;

pub use types::{win_rate, MatchResult, OpponentRow};
