//! User-scoped deck tags.

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::tag_repo;
use crate::http::auth::JwtAuth;

#[derive(Deserialize)]
pub struct CreateTagReq {
    pub name: String,
}

/// POST /api/tags
#[post("/tags")]
pub async fn create_tag(
    auth: JwtAuth,
    info: web::Json<CreateTagReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    if info.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("tag name required");
    }
    match tag_repo::create_tag(&db, auth.user_id, info.name.trim()).await {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(e) => {
            log::error!("create tag: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/tags
#[get("/tags")]
pub async fn list_tags(auth: JwtAuth, db: web::Data<PgPool>) -> impl Responder {
    match tag_repo::list_tags(&db, auth.user_id).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => {
            log::error!("list tags: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/tags/{id}
#[delete("/tags/{id}")]
pub async fn delete_tag(auth: JwtAuth, path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    match tag_repo::delete_tag(&db, auth.user_id, path.into_inner()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("no such tag"),
        Err(e) => {
            log::error!("delete tag: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// POST /api/decks/{deck_id}/tags/{tag_id}
#[post("/decks/{deck_id}/tags/{tag_id}")]
pub async fn attach_tag(
    auth: JwtAuth,
    path: web::Path<(Uuid, Uuid)>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let (deck_id, tag_id) = path.into_inner();
    match tag_repo::attach_tag(&db, auth.user_id, deck_id, tag_id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("no such deck or tag"),
        Err(e) => {
            log::error!("attach tag: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/decks/{deck_id}/tags/{tag_id}
#[delete("/decks/{deck_id}/tags/{tag_id}")]
pub async fn detach_tag(
    auth: JwtAuth,
    path: web::Path<(Uuid, Uuid)>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let (deck_id, tag_id) = path.into_inner();
    match tag_repo::detach_tag(&db, auth.user_id, deck_id, tag_id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("no such attachment"),
        Err(e) => {
            log::error!("detach tag: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_tag)
        .service(list_tags)
        .service(delete_tag)
        .service(attach_tag)
        .service(detach_tag);
}
