use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Tag;

pub async fn create_tag(db: &PgPool, user_id: Uuid, name: &str) -> Result<Tag> {
    sqlx::query_as::<_, Tag>(
        r#"INSERT INTO tags (user_id, name)
           VALUES ($1, $2)
           ON CONFLICT (user_id, name) DO UPDATE SET name = EXCLUDED.name
           RETURNING id, user_id, name"#,
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(db)
    .await
    .context("creating tag")
}

pub async fn list_tags(db: &PgPool, user_id: Uuid) -> Result<Vec<Tag>> {
    sqlx::query_as::<_, Tag>("SELECT id, user_id, name FROM tags WHERE user_id = $1 ORDER BY name")
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("listing tags")
}

pub async fn delete_tag(db: &PgPool, user_id: Uuid, tag_id: Uuid) -> Result<bool> {
    let rows = sqlx::query("DELETE FROM tags WHERE id = $1 AND user_id = $2")
        .bind(tag_id)
        .bind(user_id)
        .execute(db)
        .await
        .context("deleting tag")?
        .rows_affected();
    Ok(rows > 0)
}

/// Attach a tag to a deck. Both must belong to the user; attaching an
/// already-attached tag succeeds as a no-op. `Ok(false)` only when the deck
/// or tag is missing / not the user's.
pub async fn attach_tag(db: &PgPool, user_id: Uuid, deck_id: Uuid, tag_id: Uuid) -> Result<bool> {
    let rows = sqlx::query(
        r#"INSERT INTO deck_tags (deck_id, tag_id)
           SELECT d.id, t.id
             FROM decks d, tags t
            WHERE d.id = $1 AND d.user_id = $3 AND d.active
              AND t.id = $2 AND t.user_id = $3
           ON CONFLICT DO NOTHING"#,
    )
    .bind(deck_id)
    .bind(tag_id)
    .bind(user_id)
    .execute(db)
    .await
    .context("attaching tag")?
    .rows_affected();
    if rows > 0 {
        return Ok(true);
    }

    // Zero rows means either an unknown/foreign deck or tag, or an existing
    // attachment swallowed by ON CONFLICT. The latter is a success.
    sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(
               SELECT 1
                 FROM deck_tags dt
                 JOIN decks d ON d.id = dt.deck_id
                 JOIN tags t ON t.id = dt.tag_id
                WHERE dt.deck_id = $1 AND dt.tag_id = $2
                  AND d.user_id = $3 AND t.user_id = $3
           )"#,
    )
    .bind(deck_id)
    .bind(tag_id)
    .bind(user_id)
    .fetch_one(db)
    .await
    .context("checking existing attachment")
}

pub async fn detach_tag(db: &PgPool, user_id: Uuid, deck_id: Uuid, tag_id: Uuid) -> Result<bool> {
    let rows = sqlx::query(
        r#"DELETE FROM deck_tags dt
            USING decks d
            WHERE dt.deck_id = $1 AND dt.tag_id = $2
              AND d.id = dt.deck_id AND d.user_id = $3"#,
    )
    .bind(deck_id)
    .bind(tag_id)
    .bind(user_id)
    .execute(db)
    .await
    .context("detaching tag")?
    .rows_affected();
    Ok(rows > 0)
}

/// Tags attached to one deck.
pub async fn deck_tags(db: &PgPool, user_id: Uuid, deck_id: Uuid) -> Result<Vec<Tag>> {
    sqlx::query_as::<_, Tag>(
        r#"SELECT t.id, t.user_id, t.name
             FROM tags t
             JOIN deck_tags dt ON dt.tag_id = t.id
             JOIN decks d ON d.id = dt.deck_id
            WHERE dt.deck_id = $1 AND d.user_id = $2
            ORDER BY t.name"#,
    )
    .bind(deck_id)
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing deck tags")
}
