//! Commander deck & match tracking server.
//!
//! Library crate consumed by `src/bin/main.rs`; pure aggregation and
//! validation logic lives in [`stats`] and [`pairing`] so it can be tested
//! without a database.

pub mod cache;
pub mod config;
pub mod db;
pub mod http;
pub mod metrics;
pub mod pairing;
pub mod stats;
