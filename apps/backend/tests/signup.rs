mod support;

use actix_web::{test, App};
use backend::entities::users;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

#[actix_web::test]
async fn test_signup_creates_account_and_returns_token() {
    let created = support::user_fixture(1, "new@x.com", "pw123456");
    // First query: email uniqueness check (empty). Second: INSERT .. RETURNING.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new(), vec![created]])
        .into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({"name": "Test User", "email": "new@x.com", "password": "pw123456"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Account created successfully");

    let token = body["auth_token"].as_str().unwrap();
    let claims = backend::verify_access_token(token, &support::security()).unwrap();
    assert_eq!(claims.user_id, 1);
}

#[actix_web::test]
async fn test_signup_with_blank_password_is_unprocessable() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({"name": "Test User", "email": "new@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Validation failed: Password can't be blank");
}

#[actix_web::test]
async fn test_signup_with_taken_email_is_unprocessable() {
    let existing = support::user_fixture(1, "taken@x.com", "pw123456");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing]])
        .into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({"name": "Other", "email": "taken@x.com", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Validation failed: Email has already been taken");
}
