//! Account creation.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::hash_password;
use crate::entities::users;
use crate::error::AppError;
use crate::repos::users as users_repo;
use crate::state::security_config::SecurityConfig;

/// Create an account and mint a first token for it.
pub async fn signup<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    security: &SecurityConfig,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(users::Model, String), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Validation failed: Name can't be blank"));
    }
    if email.trim().is_empty() {
        return Err(AppError::validation("Validation failed: Email can't be blank"));
    }
    if password.is_empty() {
        return Err(AppError::validation(
            "Validation failed: Password can't be blank",
        ));
    }

    if users_repo::find_by_email(conn, email).await?.is_some() {
        return Err(AppError::validation(
            "Validation failed: Email has already been taken",
        ));
    }

    let password_hash = hash_password(password)?;
    let user = users_repo::create(conn, name.trim(), email, &password_hash).await?;
    info!(user_id = user.id, "user created");

    let token = mint_access_token(user.id, SystemTime::now(), security)?;
    Ok((user, token))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use time::OffsetDateTime;

    use super::signup;
    use crate::entities::users;
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    #[tokio::test]
    async fn test_signup_rejects_blank_fields_before_touching_the_db() {
        // No scripted query results: a DB hit would fail the test.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for (name, email, password) in [
            ("", "a@x.com", "pw"),
            ("A", "", "pw"),
            ("A", "a@x.com", ""),
        ] {
            let result = signup(&db, &test_security(), name, email, password).await;
            assert!(matches!(result, Err(AppError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let now = OffsetDateTime::now_utc();
        let existing = users::Model {
            id: 1,
            name: "Existing".to_string(),
            email: "taken@x.com".to_string(),
            password_hash: "unused".to_string(),
            created_at: now,
            updated_at: now,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .into_connection();

        let result = signup(&db, &test_security(), "New", "taken@x.com", "pw").await;
        match result {
            Err(AppError::Validation { detail }) => {
                assert_eq!(detail, "Validation failed: Email has already been taken");
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }
}
