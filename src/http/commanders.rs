//! Read-only commander catalogue.

use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

use crate::cache::{self, COMMANDERS};
use crate::db::commander_repo;
use crate::db::models::Commander;

#[get("/commanders")]
pub async fn list_commanders(db: web::Data<PgPool>) -> impl Responder {
    // Use the warm cache if populated; otherwise fall back to DB
    let mut cards: Vec<Commander> = if !COMMANDERS.is_empty() {
        COMMANDERS.iter().map(|e| e.value().clone()).collect()
    } else {
        // Rare fallback path before warm-up completes
        match commander_repo::list_commanders(&db).await {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("list commanders: {e:#}");
                return HttpResponse::InternalServerError().finish();
            }
        }
    };
    cards.sort_by(|a, b| a.name.cmp(&b.name));

    HttpResponse::Ok().json(cards)
}

#[get("/commanders/{id}")]
pub async fn get_commander(path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    let id = path.into_inner();
    if let Some(card) = cache::get_commander(id) {
        return HttpResponse::Ok().json(card);
    }
    match commander_repo::get_commander(&db, id).await {
        Ok(Some(card)) => HttpResponse::Ok().json(card),
        Ok(None) => HttpResponse::NotFound().body("no such commander"),
        Err(e) => {
            log::error!("get commander: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_commanders).service(get_commander);
}
