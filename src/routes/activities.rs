use std::sync::RwLock;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::activity::MessageResponse;
use crate::registry::ActivityRegistry;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

// GET /activities - Full registry keyed by activity name
async fn get_activities(
    registry: web::Data<RwLock<ActivityRegistry>>,
) -> AppResult<HttpResponse> {
    let registry = registry.read().unwrap();
    Ok(HttpResponse::Ok().json(registry.list()))
}

// POST /activities/{activity_name}/signup?email=...
async fn signup_for_activity(
    registry: web::Data<RwLock<ActivityRegistry>>,
    activity_name: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> AppResult<HttpResponse> {
    let mut registry = registry.write().unwrap();
    registry.signup(&activity_name, &query.email)?;

    info!("Signed up {} for {}", query.email, activity_name.as_str());
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

// POST /activities/{activity_name}/unregister?email=...
async fn unregister_from_activity(
    registry: web::Data<RwLock<ActivityRegistry>>,
    activity_name: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> AppResult<HttpResponse> {
    let mut registry = registry.write().unwrap();
    registry.unregister(&activity_name, &query.email)?;

    info!("Removed {} from {}", query.email, activity_name.as_str());
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Removed {} from {}", query.email, activity_name),
    }))
}

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    // A missing ?email=... surfaces as the same {"detail": ...} body as every
    // other client error.
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .service(
        web::scope("/activities")
            .route("", web::get().to(get_activities))
            .route(
                "/{activity_name}/signup",
                web::post().to(signup_for_activity),
            )
            .route(
                "/{activity_name}/unregister",
                web::post().to(unregister_from_activity),
            ),
    );
}
