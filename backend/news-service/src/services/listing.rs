use crate::models::{NewsRecord, NewsView};

/// Project stored records into their external views, preserving order.
pub fn project(records: Vec<NewsRecord>) -> Vec<NewsView> {
    records.into_iter().map(NewsView::from).collect()
}
