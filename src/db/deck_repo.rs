use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Deck;

const COLUMNS: &str = "id, user_id, name, deck_type, commander_id, \
                       associated_commander_id, association, active, created_at";

pub struct NewDeck<'a> {
    pub name: &'a str,
    pub deck_type: &'a str,
    pub commander_id: Option<Uuid>,
    pub associated_commander_id: Option<Uuid>,
    pub association: Option<&'a str>,
}

pub async fn create_deck(db: &PgPool, user_id: Uuid, deck: NewDeck<'_>) -> Result<Deck> {
    sqlx::query_as::<_, Deck>(&format!(
        r#"INSERT INTO decks
               (user_id, name, deck_type, commander_id,
                associated_commander_id, association)
           VALUES ($1, $2, $3, $4, $5, $6)
           RETURNING {COLUMNS}"#
    ))
    .bind(user_id)
    .bind(deck.name)
    .bind(deck.deck_type)
    .bind(deck.commander_id)
    .bind(deck.associated_commander_id)
    .bind(deck.association)
    .fetch_one(db)
    .await
    .context("creating deck")
}

/// Active decks owned by the user, newest first.
pub async fn list_decks(db: &PgPool, user_id: Uuid) -> Result<Vec<Deck>> {
    sqlx::query_as::<_, Deck>(&format!(
        "SELECT {COLUMNS} FROM decks
          WHERE user_id = $1 AND active
          ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing decks")
}

/// Scoped to the owner: another user's deck comes back as `None`.
pub async fn get_deck(db: &PgPool, user_id: Uuid, deck_id: Uuid) -> Result<Option<Deck>> {
    sqlx::query_as::<_, Deck>(&format!(
        "SELECT {COLUMNS} FROM decks
          WHERE id = $1 AND user_id = $2 AND active"
    ))
    .bind(deck_id)
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("fetching deck")
}

pub async fn rename_deck(db: &PgPool, user_id: Uuid, deck_id: Uuid, name: &str) -> Result<bool> {
    let rows = sqlx::query(
        "UPDATE decks SET name = $3 WHERE id = $1 AND user_id = $2 AND active",
    )
    .bind(deck_id)
    .bind(user_id)
    .bind(name)
    .execute(db)
    .await
    .context("renaming deck")?
    .rows_affected();
    Ok(rows > 0)
}

pub async fn soft_delete_deck(db: &PgPool, user_id: Uuid, deck_id: Uuid) -> Result<bool> {
    let rows = sqlx::query(
        "UPDATE decks SET active = FALSE WHERE id = $1 AND user_id = $2 AND active",
    )
    .bind(deck_id)
    .bind(user_id)
    .execute(db)
    .await
    .context("deleting deck")?
    .rows_affected();
    Ok(rows > 0)
}
