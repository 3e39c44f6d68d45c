/// Data models for news-service
///
/// - `NewsRecord`: the stored entity
/// - `NewsPatch`: partial update payload
/// - `NewsView` / `NewsListResponse`: external JSON shapes
pub mod news;

pub use news::{NewsListResponse, NewsPatch, NewsRecord, NewsView};
