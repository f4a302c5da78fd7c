use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Tournament;

const COLUMNS: &str = "id, user_id, name, event_date, location, standing";

pub struct NewTournament<'a> {
    pub name: &'a str,
    pub event_date: NaiveDate,
    pub location: Option<&'a str>,
    pub standing: Option<i32>,
}

pub async fn create_tournament(
    db: &PgPool,
    user_id: Uuid,
    t: NewTournament<'_>,
) -> Result<Tournament> {
    sqlx::query_as::<_, Tournament>(&format!(
        r#"INSERT INTO tournaments (user_id, name, event_date, location, standing)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING {COLUMNS}"#
    ))
    .bind(user_id)
    .bind(t.name)
    .bind(t.event_date)
    .bind(t.location)
    .bind(t.standing)
    .fetch_one(db)
    .await
    .context("creating tournament")
}

pub async fn list_tournaments(db: &PgPool, user_id: Uuid) -> Result<Vec<Tournament>> {
    sqlx::query_as::<_, Tournament>(&format!(
        "SELECT {COLUMNS} FROM tournaments
          WHERE user_id = $1
          ORDER BY event_date DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing tournaments")
}

pub async fn get_tournament(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<Tournament>> {
    sqlx::query_as::<_, Tournament>(&format!(
        "SELECT {COLUMNS} FROM tournaments WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("fetching tournament")
}

pub async fn delete_tournament(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool> {
    let rows = sqlx::query("DELETE FROM tournaments WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await
        .context("deleting tournament")?
        .rows_affected();
    Ok(rows > 0)
}
