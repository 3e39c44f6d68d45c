use serde::{Deserialize, Serialize};

/// A stored news item
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct NewsRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl NewsRecord {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial update payload for `POST /edit/{id}`
///
/// Each field keeps its presence flag. `null` deserializes to `None`, and an
/// empty string is treated the same as an absent field when merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewsPatch {
    #[serde(default, rename = "Title", alias = "title")]
    pub title: Option<String>,
    #[serde(default, rename = "Content", alias = "content")]
    pub content: Option<String>,
}

impl NewsPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// External representation of a news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewsView {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<NewsRecord> for NewsView {
    fn from(record: NewsRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
        }
    }
}

/// Response body for `GET /list`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewsListResponse {
    pub success: bool,
    pub news: Vec<NewsView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_accepts_pascal_and_lower_case_keys() {
        let patch: NewsPatch = serde_json::from_value(json!({ "Title": "New" })).unwrap();
        assert_eq!(patch, NewsPatch::default().title("New"));

        let patch: NewsPatch = serde_json::from_value(json!({ "content": "Body" })).unwrap();
        assert_eq!(patch, NewsPatch::default().content("Body"));
    }

    #[test]
    fn test_patch_null_and_unknown_fields() {
        let patch: NewsPatch =
            serde_json::from_value(json!({ "Title": null, "Id": 99, "Extra": true })).unwrap();
        assert_eq!(patch, NewsPatch::default());
    }

    #[test]
    fn test_patch_rejects_wrong_types() {
        let result: Result<NewsPatch, _> = serde_json::from_value(json!({ "Title": 5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_view_serializes_with_external_keys() {
        let view = NewsView::from(NewsRecord::new(1, "New", "Body"));
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({ "Id": 1, "Title": "New", "Content": "Body" })
        );
    }

    #[test]
    fn test_empty_list_serializes_as_array() {
        let body = NewsListResponse {
            success: true,
            news: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "Success": true, "News": [] })
        );
    }
}
