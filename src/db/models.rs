use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Catalogue card with the capability flags pairing validation needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Commander {
    pub id: Uuid,
    pub name: String,
    pub partner: bool,
    pub friends_forever: bool,
    pub doctor_companion: bool,
    pub time_lord_doctor: bool,
    pub choose_a_background: bool,
    pub background: bool,
}

#[derive(Debug, FromRow, Serialize)]
pub struct Deck {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub deck_type: String,
    pub commander_id: Option<Uuid>,
    pub associated_commander_id: Option<Uuid>,
    /// Pairing key when two commanders are registered ("partner", ...).
    pub association: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Immutable once created except for the soft-delete flag.
#[derive(Debug, FromRow, Serialize)]
pub struct LoggedMatch {
    pub id: Uuid,
    pub user_id: Uuid,
    pub deck_id: Uuid,
    pub played_at: DateTime<Utc>,
    /// TEXT column, one of WIN / LOSS / DRAW.
    pub result: String,
    pub seat: i32,
    pub mulligans: Option<i32>,
    pub tournament_id: Option<Uuid>,
    pub active: bool,
}

#[derive(Debug, FromRow, Serialize)]
pub struct MatchOpponent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub seat: i32,
    pub commander_id: Uuid,
    pub role: String,
}

#[derive(Debug, FromRow, Serialize)]
pub struct Tag {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Debug, FromRow, Serialize)]
pub struct Tournament {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub event_date: NaiveDate,
    pub location: Option<String>,
    pub standing: Option<i32>,
}
