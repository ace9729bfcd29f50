/// Trimmed display form of an exercise name, or `None` when blank.
pub fn normalize_entry(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Dedup key for the registry: two entries collide when their keys match.
pub fn entry_key(entry: &str) -> String {
    entry.trim().to_lowercase()
}

pub fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
