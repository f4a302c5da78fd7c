use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{LoggedMatch, MatchOpponent};
use crate::stats::MatchResult;

pub struct NewOpponent {
    pub seat: i32,
    pub commander_id: Uuid,
    pub role: String,
}

pub struct NewMatch {
    pub deck_id: Uuid,
    pub played_at: Option<DateTime<Utc>>,
    pub result: MatchResult,
    pub seat: i32,
    pub mulligans: Option<i32>,
    pub tournament_id: Option<Uuid>,
    pub opponents: Vec<NewOpponent>,
}

/// Insert a match and its opponent rows in one transaction.
///
/// Returns `None` without writing anything when the deck is not an active
/// deck of this user.
pub async fn log_match(db: &PgPool, user_id: Uuid, new: NewMatch) -> Result<Option<Uuid>> {
    let mut tx = db.begin().await.context("opening transaction")?;

    let owned: bool = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM decks WHERE id = $1 AND user_id = $2 AND active)",
    )
    .bind(new.deck_id)
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await
    .context("checking deck ownership")?;
    if !owned {
        tx.rollback().await.ok();
        return Ok(None);
    }

    let match_id: Uuid = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO logged_matches
               (user_id, deck_id, played_at, result, seat, mulligans, tournament_id)
           VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6, $7)
           RETURNING id"#,
    )
    .bind(user_id)
    .bind(new.deck_id)
    .bind(new.played_at)
    .bind(new.result.as_str())
    .bind(new.seat)
    .bind(new.mulligans)
    .bind(new.tournament_id)
    .fetch_one(&mut *tx)
    .await
    .context("inserting match")?;

    for opp in &new.opponents {
        sqlx::query(
            "INSERT INTO match_opponents (match_id, seat, commander_id, role)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(match_id)
        .bind(opp.seat)
        .bind(opp.commander_id)
        .bind(&opp.role)
        .execute(&mut *tx)
        .await
        .context("inserting match opponent")?;
    }

    tx.commit().await.context("committing match")?;
    Ok(Some(match_id))
}

/// Active matches for the user, optionally narrowed to one deck.
pub async fn list_matches(
    db: &PgPool,
    user_id: Uuid,
    deck_id: Option<Uuid>,
) -> Result<Vec<LoggedMatch>> {
    sqlx::query_as::<_, LoggedMatch>(
        "SELECT id, user_id, deck_id, played_at, result, seat, mulligans,
                tournament_id, active
           FROM logged_matches
          WHERE user_id = $1
            AND active
            AND ($2::uuid IS NULL OR deck_id = $2)
          ORDER BY played_at DESC",
    )
    .bind(user_id)
    .bind(deck_id)
    .fetch_all(db)
    .await
    .context("listing matches")
}

/// Opponent rows for one of the user's matches.
pub async fn match_opponents(
    db: &PgPool,
    user_id: Uuid,
    match_id: Uuid,
) -> Result<Vec<MatchOpponent>> {
    sqlx::query_as::<_, MatchOpponent>(
        r#"SELECT o.id, o.match_id, o.seat, o.commander_id, o.role
             FROM match_opponents o
             JOIN logged_matches m ON m.id = o.match_id
            WHERE o.match_id = $1 AND m.user_id = $2 AND m.active
            ORDER BY o.seat"#,
    )
    .bind(match_id)
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing match opponents")
}

/// Matches are immutable; deletion only flips the active flag.
pub async fn soft_delete_match(db: &PgPool, user_id: Uuid, match_id: Uuid) -> Result<bool> {
    let rows = sqlx::query(
        "UPDATE logged_matches SET active = FALSE
          WHERE id = $1 AND user_id = $2 AND active",
    )
    .bind(match_id)
    .bind(user_id)
    .execute(db)
    .await
    .context("deleting match")?
    .rows_affected();
    Ok(rows > 0)
}
