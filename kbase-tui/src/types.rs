use serde::{Deserialize, Serialize};

/// A single note as persisted under the storage key.
///
/// Field order matters: it is the order the JSON blob is written in, so a
/// read followed by a write reproduces the stored bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl Entry {
    /// Whether `needle` occurs in the title, content or any tag, ignoring case.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Split raw comma-separated tag input into trimmed, non-empty tags.
/// Order is kept and duplicates are not removed.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_tags`] for pre-filling form fields.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, content: &str, tags: &[&str]) -> Entry {
        Entry {
            id: 1,
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_tags_trims_and_drops_empty_pieces() {
        assert_eq!(parse_tags("food, baking"), vec!["food", "baking"]);
        assert_eq!(parse_tags(" a ,, b ,  ,c"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_parse_tags_keeps_duplicates_and_order() {
        assert_eq!(parse_tags("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_join_tags_round_trips_through_parse() {
        let tags = vec!["food".to_string(), "baking".to_string()];
        assert_eq!(join_tags(&tags), "food, baking");
        assert_eq!(parse_tags(&join_tags(&tags)), tags);
    }

    #[test]
    fn test_matches_title_content_or_tag_case_insensitively() {
        let e = entry("Recipe", "Bake at 350", &["food", "Baking"]);
        assert!(e.matches("recipe"));
        assert!(e.matches("BAKE"));
        assert!(e.matches("bakin"));
        assert!(e.matches("FOO"));
        assert!(!e.matches("garden"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(entry("", "", &[]).matches(""));
    }

    #[test]
    fn test_serialized_field_order_is_stable() {
        let e = entry("t", "c", &["x"]);
        let raw = serde_json::to_string(&e).unwrap();
        assert_eq!(raw, r#"{"id":1,"title":"t","content":"c","tags":["x"]}"#);
    }
}
