//! Item operations. The parent todo is resolved first so item access
//! inherits the user scoping (and unknown todos 404 before anything else).

use sea_orm::ConnectionTrait;

use crate::entities::items;
use crate::error::AppError;
use crate::repos::items as items_repo;
use crate::services::todos as todos_service;

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
) -> Result<Vec<items::Model>, AppError> {
    let todo = todos_service::get(conn, user_id, todo_id).await?;
    items_repo::list_for_todo(conn, todo.id).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
    name: &str,
    done: bool,
) -> Result<items::Model, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation(
            "Validation failed: Name can't be blank",
        ));
    }
    let todo = todos_service::get(conn, user_id, todo_id).await?;
    items_repo::create(conn, todo.id, name.trim(), done).await
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
    item_id: i64,
) -> Result<items::Model, AppError> {
    let todo = todos_service::get(conn, user_id, todo_id).await?;
    items_repo::find_in_todo(conn, item_id, todo.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Couldn't find Item with 'id'={item_id}")))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
    item_id: i64,
    name: Option<&str>,
    done: Option<bool>,
) -> Result<items::Model, AppError> {
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(AppError::validation(
                "Validation failed: Name can't be blank",
            ));
        }
    }
    let item = get(conn, user_id, todo_id, item_id).await?;
    items_repo::update(conn, item, name.map(str::trim), done).await
}

pub async fn destroy<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
    item_id: i64,
) -> Result<(), AppError> {
    let item = get(conn, user_id, todo_id, item_id).await?;
    items_repo::delete(conn, item.id).await
}
