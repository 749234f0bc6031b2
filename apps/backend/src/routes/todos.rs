use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entities::todos;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::services::todos as todos_service;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub created_by: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<todos::Model> for TodoResponse {
    fn from(model: todos::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TodoParams {
    #[serde(default)]
    pub title: String,
}

async fn index(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let todos = todos_service::list(db, user.id).await?;
    let body: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create(
    user: CurrentUser,
    params: web::Json<TodoParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let todo = todos_service::create(db, user.id, &params.title).await?;
    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

async fn show(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let todo = todos_service::get(db, user.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

async fn update(
    user: CurrentUser,
    path: web::Path<i64>,
    params: web::Json<TodoParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    todos_service::update(db, user.id, path.into_inner(), &params.title).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn destroy(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    todos_service::destroy(db, user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(index))
        .route("", web::post().to(create))
        .route("/{todo_id}", web::get().to(show))
        .route("/{todo_id}", web::put().to(update))
        .route("/{todo_id}", web::delete().to(destroy))
        .service(web::scope("/{todo_id}/items").configure(super::items::configure_routes));
}
