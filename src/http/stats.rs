//! Aggregated statistics endpoints.

use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{deck_repo, stats_repo};
use crate::http::auth::JwtAuth;
use crate::stats::matchup::deck_matchups;
use crate::stats::mulligan::deck_mulligans;
use crate::stats::summary::performance_summary;
use crate::stats::win_rate;

/// GET /api/stats/summary — the user's overall performance.
#[get("/stats/summary")]
pub async fn summary(auth: JwtAuth, db: web::Data<PgPool>) -> impl Responder {
    let matches = match stats_repo::summary_match_rows(&db, auth.user_id).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("summary: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    };
    let opponents = match stats_repo::summary_opponent_rows(&db, auth.user_id).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("summary: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(performance_summary(&matches, &opponents))
}

/// GET /api/stats/decks/{id}/matchups — favorable & nemesis signatures.
#[get("/stats/decks/{id}/matchups")]
pub async fn matchups(auth: JwtAuth, path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    let deck_id = path.into_inner();

    // Ownership gate: a foreign deck id reads as absent.
    match deck_repo::get_deck(&db, auth.user_id, deck_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().body("no such deck"),
        Err(e) => {
            log::error!("matchups: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    let (games, wins) = match stats_repo::deck_record(&db, auth.user_id, deck_id).await {
        Ok(record) => record,
        Err(e) => {
            log::error!("matchups: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    };
    let average = win_rate(wins, games);

    let rows = match stats_repo::matchup_rows(&db, auth.user_id, deck_id).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("matchups: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let report = deck_matchups(&rows, average);
    HttpResponse::Ok().json(serde_json::json!({
        "deck_id": deck_id,
        "games": games,
        "wins": wins,
        "average_win_rate": average,
        "favorable": report.favorable,
        "nemesis": report.nemesis,
    }))
}

/// GET /api/stats/decks/{id}/mulligans — win rate by mulligans taken.
#[get("/stats/decks/{id}/mulligans")]
pub async fn mulligans(auth: JwtAuth, path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    let deck_id = path.into_inner();

    match deck_repo::get_deck(&db, auth.user_id, deck_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().body("no such deck"),
        Err(e) => {
            log::error!("mulligans: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    let rows = match stats_repo::mulligan_rows(&db, auth.user_id, deck_id).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("mulligans: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(deck_mulligans(&rows))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(summary).service(matchups).service(mulligans);
}
