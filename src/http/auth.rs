//! Password authentication (JWT access token + Redis-backed refresh)

use actix_web::{post, web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use redis::{AsyncCommands, Client as RedisClient};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::env;
use uuid::Uuid;

use crate::config::settings;
use crate::db::user_repo;

//////////////////////////////////////////////////
// Data structs
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user_id
    exp: usize,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

//////////////////////////////////////////////////
// ─────────────  JwtAuth extractor  ─────────────
//////////////////////////////////////////////////

pub mod extractor {
    use super::Claims;
    use actix_web::{
        dev::Payload, error::ErrorUnauthorized, FromRequest, HttpRequest, Result as ActixResult,
    };
    use futures_util::future::{ready, Ready};
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use std::env;
    use uuid::Uuid;

    /// Extracts and validates a Bearer-JWT, exposing the user UUID.
    #[derive(Debug, Clone)]
    pub struct JwtAuth {
        pub user_id: Uuid,
    }

    impl FromRequest for JwtAuth {
        type Error = actix_web::Error;
        type Future = Ready<ActixResult<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let res = (|| {
                // Expect:  Authorization: Bearer <JWT>
                let hdr = req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| ErrorUnauthorized("missing Authorization header"))?;

                let token = hdr
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| ErrorUnauthorized("malformed Authorization header"))?;

                let secret =
                    env::var("JWT_SECRET").map_err(|_| ErrorUnauthorized("server mis-config"))?;
                let data = decode::<Claims>(
                    token,
                    &DecodingKey::from_secret(secret.as_bytes()),
                    &Validation::default(),
                )
                .map_err(|_| ErrorUnauthorized("invalid / expired token"))?;

                let user_id =
                    Uuid::parse_str(&data.claims.sub).map_err(|_| ErrorUnauthorized("bad sub"))?;

                Ok(JwtAuth { user_id })
            })();

            ready(res)
        }
    }
}
pub use extractor::JwtAuth; // <-- makes path crate::http::auth::JwtAuth work

fn issue_access_token(user_id: Uuid) -> Result<(String, i64), HttpResponse> {
    let secret = match env::var("JWT_SECRET") {
        Ok(s) => s,
        Err(_) => return Err(HttpResponse::InternalServerError().body("server mis-config")),
    };
    let minutes = settings().access_token_minutes;
    let exp = (Utc::now() + Duration::minutes(minutes)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };
    match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    ) {
        Ok(token) => Ok((token, minutes * 60)),
        Err(_) => Err(HttpResponse::InternalServerError().body("JWT encode failed")),
    }
}

async fn mint_refresh_token(redis: &RedisClient, user_id: Uuid) -> Option<String> {
    let mut conn = redis.get_multiplexed_async_connection().await.ok()?;
    let refresh_token = Uuid::new_v4().to_string();
    let key = format!("refresh:{refresh_token}");
    let _: () = conn
        .set_ex(&key, user_id.to_string(), settings().refresh_ttl)
        .await
        .ok()?;
    Some(refresh_token)
}

//////////////////////////////////////////////////
// POST /api/auth/register
//////////////////////////////////////////////////
#[post("/auth/register")]
pub async fn register(info: web::Json<RegisterRequest>, db: web::Data<PgPool>) -> impl Responder {
    if info.username.trim().is_empty() || info.password.len() < 8 {
        return HttpResponse::BadRequest().body("username required, password min 8 chars");
    }

    match user_repo::identity_taken(&db, &info.username, &info.email).await {
        Ok(true) => return HttpResponse::Conflict().body("username or email already registered"),
        Ok(false) => {}
        Err(e) => {
            log::error!("register: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    let hash = match bcrypt::hash(&info.password, bcrypt::DEFAULT_COST) {
        Ok(h) => h,
        Err(_) => return HttpResponse::InternalServerError().body("hashing failed"),
    };

    match user_repo::create_user(&db, &info.username, &info.email, &hash).await {
        Ok(user) => HttpResponse::Created().json(serde_json::json!({
            "id": user.id,
            "username": user.username,
        })),
        Err(e) => {
            log::error!("register: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

//////////////////////////////////////////////////
// POST /api/auth/login
//////////////////////////////////////////////////
#[post("/auth/login")]
pub async fn login(
    info: web::Json<LoginRequest>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let user = match user_repo::find_by_username(&db, &info.username).await {
        Ok(Some(u)) => u,
        Ok(None) => return HttpResponse::Unauthorized().body("bad credentials"),
        Err(e) => {
            log::error!("login: {e:#}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if !bcrypt::verify(&info.password, &user.password_hash).unwrap_or(false) {
        return HttpResponse::Unauthorized().body("bad credentials");
    }

    let (access_token, expires_in) = match issue_access_token(user.id) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let refresh_token = match mint_refresh_token(&redis, user.id).await {
        Some(t) => t,
        None => return HttpResponse::InternalServerError().body("Redis unavailable"),
    };

    HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token,
        expires_in,
    })
}

//////////////////////////////////////////////////
// POST /api/auth/refresh
//////////////////////////////////////////////////
#[post("/auth/refresh")]
pub async fn refresh(
    info: web::Json<RefreshRequest>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    // consume old refresh → user_id
    let user_id_str = match redis.get_multiplexed_async_connection().await {
        Ok(mut conn) => {
            let key = format!("refresh:{}", info.refresh_token);
            if let Ok(Some(uid)) = conn.get::<_, Option<String>>(&key).await {
                let _: () = conn.del(&key).await.unwrap_or(());
                uid
            } else {
                return HttpResponse::Unauthorized().body("invalid refresh");
            }
        }
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };
    let user_id = match Uuid::parse_str(&user_id_str) {
        Ok(id) => id,
        Err(_) => return HttpResponse::Unauthorized().body("invalid refresh"),
    };

    let (access_token, expires_in) = match issue_access_token(user_id) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let refresh_token = match mint_refresh_token(&redis, user_id).await {
        Some(t) => t,
        None => return HttpResponse::InternalServerError().body("Redis unavailable"),
    };

    HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token,
        expires_in,
    })
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login).service(refresh);
}
