/// News handlers - HTTP endpoints for editing and listing news
use crate::error::Result;
use crate::models::{NewsListResponse, NewsPatch, NewsView};
use crate::services::NewsService;
use actix_web::{web, HttpResponse};

/// Apply a partial update to a news item
/// POST /edit/{id}
///
/// The body is extracted before the path so a malformed payload is
/// reported as 400 even when the id is also bad.
pub async fn edit_news(
    service: web::Data<NewsService>,
    patch: web::Json<NewsPatch>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let saved = service
        .find_and_merge(id.into_inner(), patch.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(NewsView::from(saved)))
}

/// List every news item
/// GET /list
pub async fn list_news(service: web::Data<NewsService>) -> Result<HttpResponse> {
    let news = service.list_news().await?;

    Ok(HttpResponse::Ok().json(NewsListResponse {
        success: true,
        news,
    }))
}
