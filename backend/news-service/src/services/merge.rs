/// Partial-update merge rules
use crate::models::{NewsPatch, NewsRecord};

/// Apply `patch` to `existing`.
///
/// Each field is resolved independently: a non-empty patch value replaces
/// the stored one, an absent or empty value keeps it. The id is always
/// taken from `existing`.
pub fn apply_partial_update(existing: NewsRecord, patch: NewsPatch) -> NewsRecord {
    NewsRecord {
        id: existing.id,
        title: resolve_field(existing.title, patch.title),
        content: resolve_field(existing.content, patch.content),
    }
}

/// Empty strings cannot be told apart from omitted fields on the wire,
/// so both leave the stored value untouched.
fn resolve_field(current: String, incoming: Option<String>) -> String {
    match incoming {
        Some(value) if !value.is_empty() => value,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> NewsRecord {
        NewsRecord::new(1, "Old", "Body")
    }

    #[test]
    fn test_empty_patch_is_noop() {
        assert_eq!(apply_partial_update(stored(), NewsPatch::default()), stored());

        let blank = NewsPatch::default().title("").content("");
        assert_eq!(apply_partial_update(stored(), blank), stored());
    }

    #[test]
    fn test_title_only() {
        let merged = apply_partial_update(stored(), NewsPatch::default().title("New"));
        assert_eq!(merged, NewsRecord::new(1, "New", "Body"));
    }

    #[test]
    fn test_content_only() {
        let merged = apply_partial_update(stored(), NewsPatch::default().content("Fresh"));
        assert_eq!(merged, NewsRecord::new(1, "Old", "Fresh"));
    }

    #[test]
    fn test_both_fields() {
        let patch = NewsPatch::default().title("New").content("Fresh");
        assert_eq!(
            apply_partial_update(stored(), patch),
            NewsRecord::new(1, "New", "Fresh")
        );
    }

    #[test]
    fn test_fields_resolve_independently() {
        let patch = NewsPatch::default().title("").content("Fresh");
        assert_eq!(
            apply_partial_update(stored(), patch),
            NewsRecord::new(1, "Old", "Fresh")
        );
    }

    #[test]
    fn test_whitespace_counts_as_a_value() {
        let merged = apply_partial_update(stored(), NewsPatch::default().title(" "));
        assert_eq!(merged.title, " ");
    }

    #[test]
    fn test_empty_stored_fields_can_be_filled() {
        let merged = apply_partial_update(
            NewsRecord::new(5, "", ""),
            NewsPatch::default().title("T").content("C"),
        );
        assert_eq!(merged, NewsRecord::new(5, "T", "C"));
    }

    #[test]
    fn test_id_never_changes() {
        for id in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
            let existing = NewsRecord::new(id, "a", "b");
            let patch = NewsPatch::default().title("x").content("y");
            assert_eq!(apply_partial_update(existing, patch).id, id);
        }
    }
}
