use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Commander;

const COLUMNS: &str = "id, name, partner, friends_forever, doctor_companion, \
                       time_lord_doctor, choose_a_background, background";

pub async fn list_commanders(db: &PgPool) -> Result<Vec<Commander>> {
    sqlx::query_as::<_, Commander>(&format!(
        "SELECT {COLUMNS} FROM commanders ORDER BY name"
    ))
    .fetch_all(db)
    .await
    .context("listing commanders")
}

pub async fn get_commander(db: &PgPool, id: Uuid) -> Result<Option<Commander>> {
    sqlx::query_as::<_, Commander>(&format!("SELECT {COLUMNS} FROM commanders WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("fetching commander")
}
