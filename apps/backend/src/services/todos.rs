//! Todo operations, always scoped to the requesting user.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::entities::todos;
use crate::error::AppError;
use crate::repos::todos as todos_repo;

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<todos::Model>, AppError> {
    todos_repo::list_for_user(conn, user_id).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    title: &str,
) -> Result<todos::Model, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation(
            "Validation failed: Title can't be blank",
        ));
    }
    let todo = todos_repo::create(conn, title.trim(), user_id).await?;
    debug!(todo_id = todo.id, user_id, "todo created");
    Ok(todo)
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
) -> Result<todos::Model, AppError> {
    todos_repo::find_for_user(conn, todo_id, user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Couldn't find Todo with 'id'={todo_id}")))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
    title: &str,
) -> Result<todos::Model, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation(
            "Validation failed: Title can't be blank",
        ));
    }
    let todo = get(conn, user_id, todo_id).await?;
    todos_repo::update_title(conn, todo, title.trim()).await
}

pub async fn destroy<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
) -> Result<(), AppError> {
    let todo = get(conn, user_id, todo_id).await?;
    todos_repo::delete(conn, todo.id).await
}
