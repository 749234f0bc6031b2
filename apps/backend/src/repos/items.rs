//! Item repository functions. Items are always addressed through their todo.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::items;
use crate::error::AppError;

pub async fn list_for_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i64,
) -> Result<Vec<items::Model>, AppError> {
    Ok(items::Entity::find()
        .filter(items::Column::TodoId.eq(todo_id))
        .order_by_asc(items::Column::Id)
        .all(conn)
        .await?)
}

pub async fn find_in_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    todo_id: i64,
) -> Result<Option<items::Model>, AppError> {
    Ok(items::Entity::find()
        .filter(items::Column::Id.eq(id))
        .filter(items::Column::TodoId.eq(todo_id))
        .one(conn)
        .await?)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i64,
    name: &str,
    done: bool,
) -> Result<items::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let item = items::ActiveModel {
        id: NotSet,
        todo_id: Set(todo_id),
        name: Set(name.to_string()),
        done: Set(done),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(item.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item: items::Model,
    name: Option<&str>,
    done: Option<bool>,
) -> Result<items::Model, AppError> {
    let mut active: items::ActiveModel = item.into();
    if let Some(name) = name {
        active.name = Set(name.to_string());
    }
    if let Some(done) = done {
        active.done = Set(done);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());
    Ok(active.update(conn).await?)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), AppError> {
    items::Entity::delete_by_id(id).exec(conn).await?;
    Ok(())
}
