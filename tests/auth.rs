//! Unit tests for the Bearer-JWT extractor.

use actix_web::test::TestRequest;
use actix_web::FromRequest;
use chrono::{Duration, Utc};
use decklog_server::http::auth::JwtAuth;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

const SECRET: &str = "test-secret";

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: usize,
}

fn token(sub: &str, minutes: i64) -> String {
    let exp = (Utc::now() + Duration::minutes(minutes)).timestamp() as usize;
    encode(
        &Header::default(),
        &Claims {
            sub: sub.to_string(),
            exp,
        },
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token encode")
}

#[actix_rt::test]
async fn extracts_user_id_from_bearer_token() {
    std::env::set_var("JWT_SECRET", SECRET);

    let user_id = Uuid::new_v4();
    let req = TestRequest::default()
        .insert_header((
            "Authorization",
            format!("Bearer {}", token(&user_id.to_string(), 5)),
        ))
        .to_http_request();

    let auth = JwtAuth::extract(&req).await.expect("valid token");
    assert_eq!(auth.user_id, user_id);
}

#[actix_rt::test]
async fn rejects_missing_or_malformed_header() {
    std::env::set_var("JWT_SECRET", SECRET);

    let req = TestRequest::default().to_http_request();
    assert!(JwtAuth::extract(&req).await.is_err());

    let req = TestRequest::default()
        .insert_header(("Authorization", "Token abc"))
        .to_http_request();
    assert!(JwtAuth::extract(&req).await.is_err());
}

#[actix_rt::test]
async fn rejects_expired_token() {
    std::env::set_var("JWT_SECRET", SECRET);

    // Expired well past the default validation leeway.
    let req = TestRequest::default()
        .insert_header((
            "Authorization",
            format!("Bearer {}", token(&Uuid::new_v4().to_string(), -10)),
        ))
        .to_http_request();

    assert!(JwtAuth::extract(&req).await.is_err());
}

#[actix_rt::test]
async fn rejects_non_uuid_subject() {
    std::env::set_var("JWT_SECRET", SECRET);

    let req = TestRequest::default()
        .insert_header(("Authorization", format!("Bearer {}", token("not-a-uuid", 5))))
        .to_http_request();

    assert!(JwtAuth::extract(&req).await.is_err());
}
