//! HTTP surface: one module per resource, mounted under `/api` by
//! [`routes`].

pub mod auth;
pub mod commanders;
pub mod decks;
pub mod health;
pub mod matches;
pub mod routes;
pub mod stats;
pub mod tags;
pub mod tournaments;
