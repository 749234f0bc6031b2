mod support;

use actix_web::http::header;
use actix_web::{test, App};
use backend::entities::{items, todos};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;
use time::OffsetDateTime;

fn todo_fixture(id: i64, created_by: i64) -> todos::Model {
    let now = OffsetDateTime::now_utc();
    todos::Model {
        id,
        title: "Groceries".to_string(),
        created_by,
        created_at: now,
        updated_at: now,
    }
}

fn item_fixture(id: i64, todo_id: i64, name: &str, done: bool) -> items::Model {
    let now = OffsetDateTime::now_utc();
    items::Model {
        id,
        todo_id,
        name: name.to_string(),
        done,
        created_at: now,
        updated_at: now,
    }
}

#[actix_web::test]
async fn test_index_lists_items_of_the_todo() {
    let user = support::user_fixture(7, "existing@x.com", "rightpw");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([vec![todo_fixture(1, 7)]])
        .append_query_results([vec![
            item_fixture(10, 1, "Milk", false),
            item_fixture(11, 1, "Eggs", true),
        ]])
        .into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/todos/1/items")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", support::token_for(7)),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Milk");
    assert_eq!(list[1]["done"], true);
}

#[actix_web::test]
async fn test_create_item_returns_created() {
    let user = support::user_fixture(7, "existing@x.com", "rightpw");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([vec![todo_fixture(1, 7)]])
        .append_query_results([vec![item_fixture(12, 1, "Bread", false)]])
        .into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/todos/1/items")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", support::token_for(7)),
        ))
        .set_json(json!({"name": "Bread"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Bread");
    assert_eq!(body["todo_id"], 1);
    assert_eq!(body["done"], false);
}

#[actix_web::test]
async fn test_items_of_unknown_todo_is_not_found() {
    let user = support::user_fixture(7, "existing@x.com", "rightpw");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([Vec::<todos::Model>::new()])
        .into_connection();

    let app = test::init_service(
        App::new()
            .app_data(support::state_with(db))
            .configure(backend::routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/todos/99/items")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", support::token_for(7)),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Couldn't find Todo with 'id'=99");
}
