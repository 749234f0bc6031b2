use actix_web::{guard, web};

pub mod auth;
pub mod items;
pub mod todos;
pub mod todos_v2;

use crate::versioning::ApiVersion;

/// Wire up the full HTTP surface.
///
/// The version-two surface is a single guarded resource, not a scope: a scope
/// swallows every `/todos/...` path once its guard passes, so requests the v2
/// namespace does not define would dead-end in it. Guarding only the routes v2
/// actually serves lets everything else fall through to the default v1 scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .configure(auth::configure_routes)
        .service(
            web::resource("/todos")
                .guard(guard::Get())
                .guard(ApiVersion::new("v2", false))
                .route(web::get().to(todos_v2::index)),
        )
        .service(
            web::scope("/todos")
                .guard(ApiVersion::new("v1", true))
                .configure(todos::configure_routes),
        );
}
