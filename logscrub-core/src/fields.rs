//! Sensitivity decisions for field, parameter, and header names.

/// Substring containment, case-insensitive. `"api_key"` in the list matches
/// a field named `"user_api_key_2"`.
pub(crate) fn field_matches(name: &str, sensitive: &[String]) -> bool {
    let lower = name.to_ascii_lowercase();
    sensitive
        .iter()
        .any(|s| lower.contains(&s.to_ascii_lowercase()))
}

/// Exact match, case-insensitive. Header vocabularies are small and closed,
/// so substring matching would over-redact unrelated headers.
pub(crate) fn header_matches(name: &str, sensitive: &[String]) -> bool {
    sensitive.iter().any(|s| s.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn field_match_is_substring_and_case_insensitive() {
        let sensitive = list(&["api_key", "password"]);
        assert!(field_matches("user_api_key_2", &sensitive));
        assert!(field_matches("PASSWORD", &sensitive));
        assert!(field_matches("oldPassword", &sensitive));
        assert!(!field_matches("username", &sensitive));
    }

    #[test]
    fn header_match_is_exact() {
        let sensitive = list(&["authorization", "x-api-key"]);
        assert!(header_matches("Authorization", &sensitive));
        assert!(header_matches("X-API-Key", &sensitive));
        assert!(!header_matches("x-api-key-id", &sensitive));
        assert!(!header_matches("content-type", &sensitive));
    }
}
