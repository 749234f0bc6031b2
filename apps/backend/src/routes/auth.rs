use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::auth as auth_service;
use crate::services::users as users_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub auth_token: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub auth_token: String,
}

/// Exchange email/password for a signed token.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let token = auth_service::authenticate(&req.email, &req.password, db, &app_state.security)
        .await?;
    Ok(HttpResponse::Ok().json(LoginResponse { auth_token: token }))
}

/// Create an account and return its first token.
async fn signup(
    req: web::Json<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let (_user, token) =
        users_service::signup(db, &app_state.security, &req.name, &req.email, &req.password)
            .await?;
    Ok(HttpResponse::Created().json(SignupResponse {
        message: "Account created successfully".to_string(),
        auth_token: token,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/login").route(web::post().to(login)))
        .service(web::resource("/signup").route(web::post().to(signup)));
}
