pub mod activities;

use actix_web::{http::header, web, HttpResponse};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(activities::create_routes);
}

// GET / - Redirect to the static frontend
pub async fn root_redirect() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, "/static/index.html"))
        .finish()
}
