//! Version-two namespace. Selected only by an explicit
//! `Accept: application/vnd.todos.v2+json` header; still a stub surface, so
//! it is registered route-by-route rather than as a whole scope.

use actix_web::HttpResponse;
use serde_json::json;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;

pub async fn index(_user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "message": "This is version two of the todos API"
    })))
}
