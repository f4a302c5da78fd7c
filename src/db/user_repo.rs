use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::db::models::User;

pub async fn create_user(
    db: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"INSERT INTO users (username, email, password_hash)
           VALUES ($1, $2, $3)
           RETURNING id, username, email, password_hash, created_at"#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(db)
    .await
    .context("creating user")
}

pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, password_hash, created_at
           FROM users
          WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(db)
    .await
    .context("fetching user by username")
}

/// True when either the username or the email is already registered.
pub async fn identity_taken(db: &PgPool, username: &str, email: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)",
    )
    .bind(username)
    .bind(email)
    .fetch_one(db)
    .await
    .context("checking username/email availability")
}
