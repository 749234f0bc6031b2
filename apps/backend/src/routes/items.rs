use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entities::items;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::services::items as items_service;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub todo_id: i64,
    pub name: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<items::Model> for ItemResponse {
    fn from(model: items::Model) -> Self {
        Self {
            id: model.id,
            todo_id: model.todo_id,
            name: model.name,
            done: model.done,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateItemParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemParams {
    pub name: Option<String>,
    pub done: Option<bool>,
}

async fn index(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let items = items_service::list(db, user.id, path.into_inner()).await?;
    let body: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create(
    user: CurrentUser,
    path: web::Path<i64>,
    params: web::Json<CreateItemParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let item =
        items_service::create(db, user.id, path.into_inner(), &params.name, params.done).await?;
    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

async fn show(
    user: CurrentUser,
    path: web::Path<(i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (todo_id, item_id) = path.into_inner();
    let db = app_state.require_db()?;
    let item = items_service::get(db, user.id, todo_id, item_id).await?;
    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

async fn update(
    user: CurrentUser,
    path: web::Path<(i64, i64)>,
    params: web::Json<UpdateItemParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (todo_id, item_id) = path.into_inner();
    let db = app_state.require_db()?;
    items_service::update(
        db,
        user.id,
        todo_id,
        item_id,
        params.name.as_deref(),
        params.done,
    )
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn destroy(
    user: CurrentUser,
    path: web::Path<(i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (todo_id, item_id) = path.into_inner();
    let db = app_state.require_db()?;
    items_service::destroy(db, user.id, todo_id, item_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(index))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(show))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(destroy));
}
