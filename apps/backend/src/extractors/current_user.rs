use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::auth as auth_service;
use crate::state::app_state::AppState;

/// The authenticated user behind the current request, resolved per request
/// from the bearer token and threaded into handlers as an explicit value.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;
            let db = app_state.require_db()?;

            let user = auth_service::authorize(req.headers(), db, &app_state.security).await?;

            Ok(CurrentUser {
                id: user.id,
                name: user.name,
                email: user.email,
            })
        })
    }
}
