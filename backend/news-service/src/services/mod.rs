/// Business logic layer
///
/// - `merge`: pure partial-update rules
/// - `listing`: projection of stored records into external views
/// - `news`: store-backed operations used by the handlers
pub mod listing;
pub mod merge;
pub mod news;

pub use listing::project;
pub use merge::apply_partial_update;
pub use news::{NewsService, DEFAULT_STORE_TIMEOUT};
