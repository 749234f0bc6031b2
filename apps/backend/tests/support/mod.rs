//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::time::SystemTime;

use actix_web::web;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

pub fn state_with(db: DatabaseConnection) -> web::Data<AppState> {
    web::Data::new(AppState::new(db, security()))
}

/// A users row fixture with an argon2 hash of `password`.
pub fn user_fixture(id: i64, email: &str, password: &str) -> backend::entities::users::Model {
    let now = OffsetDateTime::now_utc();
    backend::entities::users::Model {
        id,
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: backend::auth::password::hash_password(password).unwrap(),
        created_at: now,
        updated_at: now,
    }
}

/// A fresh token for `user_id`, signed with the test secret.
pub fn token_for(user_id: i64) -> String {
    backend::mint_access_token(user_id, SystemTime::now(), &security()).unwrap()
}

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
