//! Flat-row fetches feeding the pure aggregation in [`crate::stats`].

use anyhow::{anyhow, Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::stats::matchup::MatchupRow;
use crate::stats::mulligan::MulliganRow;
use crate::stats::summary::SummaryMatchRow;
use crate::stats::types::{MatchResult, OpponentRow};

fn parse_result(raw: &str) -> Result<MatchResult> {
    MatchResult::parse(raw).ok_or_else(|| anyhow!("corrupt match result {raw:?}"))
}

/// (games, wins) over a deck's active matches; the caller turns this into
/// the deck's average win rate.
pub async fn deck_record(db: &PgPool, user_id: Uuid, deck_id: Uuid) -> Result<(i64, i64)> {
    let (games, wins): (i64, i64) = sqlx::query_as::<_, (i64, i64)>(
        r#"SELECT COUNT(*),
                  COUNT(*) FILTER (WHERE result = 'WIN')
             FROM logged_matches
            WHERE deck_id = $1 AND user_id = $2 AND active"#,
    )
    .bind(deck_id)
    .bind(user_id)
    .fetch_one(db)
    .await
    .context("fetching deck record")?;
    Ok((games, wins))
}

/// One row per opposing commander across the deck's active matches.
pub async fn matchup_rows(db: &PgPool, user_id: Uuid, deck_id: Uuid) -> Result<Vec<MatchupRow>> {
    let rows: Vec<(Uuid, String, i32, String)> = sqlx::query_as(
        r#"SELECT m.id, m.result, o.seat, c.name
             FROM logged_matches m
             JOIN match_opponents o ON o.match_id = m.id
             JOIN commanders c ON c.id = o.commander_id
            WHERE m.deck_id = $1 AND m.user_id = $2 AND m.active"#,
    )
    .bind(deck_id)
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("fetching matchup rows")?;

    rows.into_iter()
        .map(|(match_id, result, seat, commander)| {
            Ok(MatchupRow {
                match_id,
                result: parse_result(&result)?,
                seat,
                commander,
            })
        })
        .collect()
}

/// Matches with a logged mulligan count; unlogged counts never reach the
/// aggregation.
pub async fn mulligan_rows(db: &PgPool, user_id: Uuid, deck_id: Uuid) -> Result<Vec<MulliganRow>> {
    let rows: Vec<(String, i32)> = sqlx::query_as(
        r#"SELECT result, mulligans
             FROM logged_matches
            WHERE deck_id = $1 AND user_id = $2 AND active
              AND mulligans IS NOT NULL"#,
    )
    .bind(deck_id)
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("fetching mulligan rows")?;

    rows.into_iter()
        .map(|(result, mulligans)| {
            Ok(MulliganRow {
                result: parse_result(&result)?,
                mulligans,
            })
        })
        .collect()
}

/// Every active match of the user joined to its deck.
pub async fn summary_match_rows(db: &PgPool, user_id: Uuid) -> Result<Vec<SummaryMatchRow>> {
    let rows: Vec<(Uuid, Uuid, String, String, i32)> = sqlx::query_as(
        r#"SELECT m.id, m.deck_id, d.name, m.result, m.seat
             FROM logged_matches m
             JOIN decks d ON d.id = m.deck_id
            WHERE m.user_id = $1 AND m.active"#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("fetching summary rows")?;

    rows.into_iter()
        .map(|(match_id, deck_id, deck_name, result, seat)| {
            Ok(SummaryMatchRow {
                match_id,
                deck_id,
                deck_name,
                result: parse_result(&result)?,
                seat,
            })
        })
        .collect()
}

/// Opposing commanders across all of the user's active matches.
pub async fn summary_opponent_rows(db: &PgPool, user_id: Uuid) -> Result<Vec<OpponentRow>> {
    let rows: Vec<(Uuid, i32, String)> = sqlx::query_as(
        r#"SELECT m.id, o.seat, c.name
             FROM logged_matches m
             JOIN match_opponents o ON o.match_id = m.id
             JOIN commanders c ON c.id = o.commander_id
            WHERE m.user_id = $1 AND m.active"#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("fetching opponent rows")?;

    Ok(rows
        .into_iter()
        .map(|(match_id, seat, commander)| OpponentRow {
            match_id,
            seat,
            commander,
        })
        .collect())
}
