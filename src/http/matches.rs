//! Logging and listing matches.

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::match_repo::{self, NewMatch, NewOpponent};
use crate::http::auth::JwtAuth;
use crate::metrics::MATCHES_LOGGED;
use crate::stats::mulligan::FREE_MULLIGAN;
use crate::stats::types::{SEAT_MAX, SEAT_MIN};
use crate::stats::MatchResult;

#[derive(Deserialize)]
pub struct OpponentReq {
    pub seat: i32,
    pub commander_id: Uuid,
    /// "primary", "partner", "background", ...
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "primary".to_string()
}

#[derive(Deserialize)]
pub struct LogMatchReq {
    pub deck_id: Uuid,
    pub played_at: Option<DateTime<Utc>>,
    pub result: MatchResult,
    pub seat: i32,
    pub mulligans: Option<i32>,
    pub tournament_id: Option<Uuid>,
    #[serde(default)]
    pub opponents: Vec<OpponentReq>,
}

fn seat_in_range(seat: i32) -> bool {
    (SEAT_MIN..=SEAT_MAX).contains(&seat)
}

/// POST /api/matches
#[post("/matches")]
pub async fn log_match(
    auth: JwtAuth,
    info: web::Json<LogMatchReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let info = info.into_inner();

    if !seat_in_range(info.seat) {
        return HttpResponse::BadRequest().body("seat must be within 1-4");
    }
    if let Some(m) = info.mulligans {
        if m < FREE_MULLIGAN {
            return HttpResponse::BadRequest().body("mulligans must be >= -1");
        }
    }
    for opp in &info.opponents {
        if !seat_in_range(opp.seat) {
            return HttpResponse::BadRequest().body("opponent seat must be within 1-4");
        }
        if opp.seat == info.seat {
            return HttpResponse::BadRequest().body("opponent cannot share the logger's seat");
        }
    }

    let new = NewMatch {
        deck_id: info.deck_id,
        played_at: info.played_at,
        result: info.result,
        seat: info.seat,
        mulligans: info.mulligans,
        tournament_id: info.tournament_id,
        opponents: info
            .opponents
            .into_iter()
            .map(|o| NewOpponent {
                seat: o.seat,
                commander_id: o.commander_id,
                role: o.role,
            })
            .collect(),
    };

    match match_repo::log_match(&db, auth.user_id, new).await {
        Ok(Some(match_id)) => {
            MATCHES_LOGGED.inc();
            HttpResponse::Created().json(serde_json::json!({ "id": match_id }))
        }
        Ok(None) => HttpResponse::NotFound().body("no such deck"),
        Err(e) => {
            log::error!("log match: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
pub struct ListMatchesParams {
    pub deck_id: Option<Uuid>,
}

/// GET /api/matches?deck_id=...
#[get("/matches")]
pub async fn list_matches(
    auth: JwtAuth,
    web::Query(params): web::Query<ListMatchesParams>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match match_repo::list_matches(&db, auth.user_id, params.deck_id).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            log::error!("list matches: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/matches/{id}/opponents
#[get("/matches/{id}/opponents")]
pub async fn list_opponents(
    auth: JwtAuth,
    path: web::Path<Uuid>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match match_repo::match_opponents(&db, auth.user_id, path.into_inner()).await {
        Ok(opponents) => HttpResponse::Ok().json(opponents),
        Err(e) => {
            log::error!("match opponents: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/matches/{id} — soft delete.
#[delete("/matches/{id}")]
pub async fn delete_match(
    auth: JwtAuth,
    path: web::Path<Uuid>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match match_repo::soft_delete_match(&db, auth.user_id, path.into_inner()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("no such match"),
        Err(e) => {
            log::error!("delete match: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(log_match)
        .service(list_matches)
        .service(list_opponents)
        .service(delete_match);
}
