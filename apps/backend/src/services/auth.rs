//! Request authorization and credential authentication.
//!
//! `authorize` runs on every protected request: it only proves possession of
//! a valid signed claim and costs a single user lookup by id. `authenticate`
//! proves knowledge of the password and only runs at login.

use std::time::SystemTime;

use actix_web::http::header;
use actix_web::http::header::HeaderMap;
use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::auth::jwt::{mint_access_token, verify_access_token};
use crate::auth::password::verify_password;
use crate::entities::users;
use crate::error::AppError;
use crate::repos::users as users_repo;
use crate::state::security_config::SecurityConfig;

/// Pull the bearer token out of the Authorization header.
/// An absent or malformed header is `MissingToken`.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::MissingToken)?;
    let value = value.to_str().map_err(|_| AppError::MissingToken)?;

    // "Bearer <token>"
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
        return Err(AppError::MissingToken);
    }

    Ok(parts[1].to_string())
}

/// Resolve an inbound request to a user: bearer token -> claims -> users row.
/// A token whose subject no longer exists is treated as invalid.
pub async fn authorize<C: ConnectionTrait + Send + Sync>(
    headers: &HeaderMap,
    conn: &C,
    security: &SecurityConfig,
) -> Result<users::Model, AppError> {
    let token = extract_bearer(headers)?;
    let claims = verify_access_token(&token, security)?;

    users_repo::find_by_id(conn, claims.user_id)
        .await?
        .ok_or_else(|| AppError::invalid_token(format!("no user with id {}", claims.user_id)))
}

/// Check an email/password pair against stored credentials and mint a token.
pub async fn authenticate<C: ConnectionTrait + Send + Sync>(
    email: &str,
    password: &str,
    conn: &C,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let user = users_repo::find_by_email(conn, email)
        .await?
        .ok_or(AppError::AuthenticationError)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::AuthenticationError);
    }

    debug!(user_id = user.id, "credentials verified");
    mint_access_token(user.id, SystemTime::now(), security)
}
