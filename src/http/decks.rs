//! Deck CRUD, including commander-pairing validation on registration.

use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cache;
use crate::db::deck_repo::{self, NewDeck};
use crate::db::models::Commander;
use crate::db::{commander_repo, tag_repo};
use crate::http::auth::JwtAuth;
use crate::pairing::{self, Association};

#[derive(Deserialize)]
pub struct RegisterDeckReq {
    pub name: String,
    pub deck_type: String,
    pub commander_id: Option<Uuid>,
    // At most one of the association keys below may be supplied.
    pub partner_id: Option<Uuid>,
    pub friends_forever_id: Option<Uuid>,
    pub doctor_companion_id: Option<Uuid>,
    pub time_lord_doctor_id: Option<Uuid>,
    pub background_id: Option<Uuid>,
}

impl RegisterDeckReq {
    fn supplied_associations(&self) -> Vec<(Association, Uuid)> {
        [
            (Association::Partner, self.partner_id),
            (Association::FriendsForever, self.friends_forever_id),
            (Association::DoctorCompanion, self.doctor_companion_id),
            (Association::TimeLordDoctor, self.time_lord_doctor_id),
            (Association::Background, self.background_id),
        ]
        .into_iter()
        .filter_map(|(assoc, id)| id.map(|id| (assoc, id)))
        .collect()
    }
}

/// Warm cache first, Postgres as fallback.
async fn lookup_commander(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Commander>> {
    if let Some(card) = cache::get_commander(id) {
        return Ok(Some(card));
    }
    commander_repo::get_commander(db, id).await
}

/// POST /api/decks
#[post("/decks")]
pub async fn register_deck(
    auth: JwtAuth,
    info: web::Json<RegisterDeckReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    if info.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("deck name required");
    }

    // Pairing rule 1 runs before any lookup or write.
    let association = match pairing::single_association(info.supplied_associations()) {
        Ok(a) => a,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };
    if association.is_some() && info.commander_id.is_none() {
        return HttpResponse::BadRequest().body("an association requires a primary commander");
    }

    let mut associated_commander_id = None;
    let mut association_key = None;
    if let Some(commander_id) = info.commander_id {
        let primary = match lookup_commander(&db, commander_id).await {
            Ok(Some(card)) => card,
            Ok(None) => return HttpResponse::BadRequest().body("unknown commander"),
            Err(e) => {
                log::error!("register deck: {e:#}");
                return HttpResponse::InternalServerError().finish();
            }
        };

        let associate = match association {
            Some((assoc, id)) => match lookup_commander(&db, id).await {
                Ok(Some(card)) => Some((assoc, card)),
                Ok(None) => {
                    return HttpResponse::BadRequest().body("unknown associated commander")
                }
                Err(e) => {
                    log::error!("register deck: {e:#}");
                    return HttpResponse::InternalServerError().finish();
                }
            },
            None => None,
        };

        let primary_profile = cache::profile(&primary);
        let associate_profile = associate
            .as_ref()
            .map(|(assoc, card)| (*assoc, cache::profile(card)));
        if let Err(e) = pairing::validate_registration(
            &primary_profile,
            associate_profile.as_ref().map(|(a, p)| (*a, p)),
        ) {
            return HttpResponse::BadRequest().body(e.to_string());
        }

        associated_commander_id = associate.as_ref().map(|(_, card)| card.id);
        association_key = associate.map(|(assoc, _)| assoc.as_key());
    }

    let new = NewDeck {
        name: info.name.trim(),
        deck_type: &info.deck_type,
        commander_id: info.commander_id,
        associated_commander_id,
        association: association_key,
    };
    match deck_repo::create_deck(&db, auth.user_id, new).await {
        Ok(deck) => HttpResponse::Created().json(deck),
        Err(e) => {
            log::error!("register deck: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/decks
#[get("/decks")]
pub async fn list_decks(auth: JwtAuth, db: web::Data<PgPool>) -> impl Responder {
    match deck_repo::list_decks(&db, auth.user_id).await {
        Ok(decks) => HttpResponse::Ok().json(decks),
        Err(e) => {
            log::error!("list decks: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/decks/{id}
#[get("/decks/{id}")]
pub async fn get_deck(auth: JwtAuth, path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    match deck_repo::get_deck(&db, auth.user_id, path.into_inner()).await {
        Ok(Some(deck)) => HttpResponse::Ok().json(deck),
        Ok(None) => HttpResponse::NotFound().body("no such deck"),
        Err(e) => {
            log::error!("get deck: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
pub struct RenameDeckReq {
    pub name: String,
}

/// PATCH /api/decks/{id}
#[patch("/decks/{id}")]
pub async fn rename_deck(
    auth: JwtAuth,
    path: web::Path<Uuid>,
    info: web::Json<RenameDeckReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    if info.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("deck name required");
    }
    match deck_repo::rename_deck(&db, auth.user_id, path.into_inner(), info.name.trim()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("no such deck"),
        Err(e) => {
            log::error!("rename deck: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/decks/{id} — soft delete.
#[delete("/decks/{id}")]
pub async fn delete_deck(auth: JwtAuth, path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    match deck_repo::soft_delete_deck(&db, auth.user_id, path.into_inner()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("no such deck"),
        Err(e) => {
            log::error!("delete deck: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/decks/{id}/tags
#[get("/decks/{id}/tags")]
pub async fn list_deck_tags(
    auth: JwtAuth,
    path: web::Path<Uuid>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match tag_repo::deck_tags(&db, auth.user_id, path.into_inner()).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => {
            log::error!("deck tags: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_deck)
        .service(list_decks)
        .service(get_deck)
        .service(rename_deck)
        .service(delete_deck)
        .service(list_deck_tags);
}
