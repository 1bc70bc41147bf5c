//! Root welcome endpoint.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub welcome: &'static str,
}

/// GET /
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse {
        welcome: "Welcome to my API",
    })
}
