//! A big, boring list to search through. Shared by the transition and deferred value slides.

const ADJECTIVES: [&str; 8] = [
    "amber", "brisk", "calm", "dusty", "eager", "frosty", "gentle", "hollow",
];
const NOUNS: [&str; 10] = [
    "anchor", "beacon", "canyon", "delta", "ember", "falcon", "glacier", "harbor", "island",
    "juniper",
];

/// `count` generated item names, the same every time.
pub fn sample_items(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let adjective = ADJECTIVES[i % ADJECTIVES.len()];
            let noun = NOUNS[(i / ADJECTIVES.len()) % NOUNS.len()];
            format!("{adjective} {noun} #{i:04}")
        })
        .collect()
}

/// Case-insensitive substring search, returning at most `limit` matches.
///
/// A blank query matches everything.
pub fn filter_items(items: &[String], query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.to_lowercase().contains(&query))
        .take(limit)
        .cloned()
        .collect()
}

/// How many items match, without a limit.
pub fn count_matches(items: &[String], query: &str) -> usize {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.to_lowercase().contains(&query))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_deterministic() {
        let items = sample_items(12);
        assert_eq!(items[0], "amber anchor #0000");
        assert_eq!(items[9], "brisk beacon #0009");
        assert_eq!(items, sample_items(12));
    }

    #[test]
    fn filters_case_insensitively_with_a_limit() {
        let items = sample_items(400);
        let hits = filter_items(&items, "  FALCON ", 3);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|item| item.contains("falcon")));
        assert_eq!(count_matches(&items, "falcon"), 40);
    }

    #[test]
    fn blank_query_matches_everything() {
        let items = sample_items(5);
        assert_eq!(filter_items(&items, "", 10), items);
        assert_eq!(count_matches(&items, "   "), 5);
    }
}
