//! Postgres access: `FromRow` models plus per-table repo functions.

pub mod commander_repo;
pub mod deck_repo;
pub mod match_repo;
pub mod models;
pub mod stats_repo;
pub mod tag_repo;
pub mod tournament_repo;
pub mod user_repo;
