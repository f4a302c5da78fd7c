//! Tournament results.

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::tournament_repo::{self, NewTournament};
use crate::http::auth::JwtAuth;

#[derive(Deserialize)]
pub struct CreateTournamentReq {
    pub name: String,
    pub event_date: NaiveDate,
    pub location: Option<String>,
    pub standing: Option<i32>,
}

/// POST /api/tournaments
#[post("/tournaments")]
pub async fn create_tournament(
    auth: JwtAuth,
    info: web::Json<CreateTournamentReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    if info.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("tournament name required");
    }
    if matches!(info.standing, Some(s) if s < 1) {
        return HttpResponse::BadRequest().body("standing must be positive");
    }
    let new = NewTournament {
        name: info.name.trim(),
        event_date: info.event_date,
        location: info.location.as_deref(),
        standing: info.standing,
    };
    match tournament_repo::create_tournament(&db, auth.user_id, new).await {
        Ok(t) => HttpResponse::Created().json(t),
        Err(e) => {
            log::error!("create tournament: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/tournaments
#[get("/tournaments")]
pub async fn list_tournaments(auth: JwtAuth, db: web::Data<PgPool>) -> impl Responder {
    match tournament_repo::list_tournaments(&db, auth.user_id).await {
        Ok(ts) => HttpResponse::Ok().json(ts),
        Err(e) => {
            log::error!("list tournaments: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/tournaments/{id}
#[get("/tournaments/{id}")]
pub async fn get_tournament(
    auth: JwtAuth,
    path: web::Path<Uuid>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match tournament_repo::get_tournament(&db, auth.user_id, path.into_inner()).await {
        Ok(Some(t)) => HttpResponse::Ok().json(t),
        Ok(None) => HttpResponse::NotFound().body("no such tournament"),
        Err(e) => {
            log::error!("get tournament: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/tournaments/{id}
#[delete("/tournaments/{id}")]
pub async fn delete_tournament(
    auth: JwtAuth,
    path: web::Path<Uuid>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match tournament_repo::delete_tournament(&db, auth.user_id, path.into_inner()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("no such tournament"),
        Err(e) => {
            log::error!("delete tournament: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_tournament)
        .service(list_tournaments)
        .service(get_tournament)
        .service(delete_tournament);
}
