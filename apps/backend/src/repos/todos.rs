//! Todo repository functions. Every lookup is scoped to the owning user.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::todos;
use crate::error::AppError;

pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<todos::Model>, AppError> {
    Ok(todos::Entity::find()
        .filter(todos::Column::CreatedBy.eq(user_id))
        .order_by_asc(todos::Column::Id)
        .all(conn)
        .await?)
}

pub async fn find_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    user_id: i64,
) -> Result<Option<todos::Model>, AppError> {
    Ok(todos::Entity::find()
        .filter(todos::Column::Id.eq(id))
        .filter(todos::Column::CreatedBy.eq(user_id))
        .one(conn)
        .await?)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    created_by: i64,
) -> Result<todos::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let todo = todos::ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        created_by: Set(created_by),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(todo.insert(conn).await?)
}

pub async fn update_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo: todos::Model,
    title: &str,
) -> Result<todos::Model, AppError> {
    let mut active: todos::ActiveModel = todo.into();
    active.title = Set(title.to_string());
    active.updated_at = Set(OffsetDateTime::now_utc());
    Ok(active.update(conn).await?)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), AppError> {
    todos::Entity::delete_by_id(id).exec(conn).await?;
    Ok(())
}
