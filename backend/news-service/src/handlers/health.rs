use crate::services::NewsService;
use actix_web::{web, HttpResponse};

pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "news-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn readiness(service: web::Data<NewsService>) -> HttpResponse {
    match service.check_ready().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ready": true })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({ "ready": false }))
        }
    }
}
