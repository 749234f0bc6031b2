mod support;

use actix_web::http::header;
use actix_web::{test, App};
use backend::middleware::request_trace::RequestTrace;
use sea_orm::{DatabaseBackend, MockDatabase};

#[actix_web::test]
async fn test_health_is_ok() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"ok");
}

#[actix_web::test]
async fn test_missing_token_body_shape() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/todos").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({"message": "Missing token"}));
}

#[actix_web::test]
async fn test_garbage_token_is_invalid_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/todos")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid token"), "got {message:?}");
}

#[actix_web::test]
async fn test_responses_carry_a_request_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("x-request-id"));
}
