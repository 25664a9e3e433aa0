/// Tokens at or below this length are treated as stop words ("in", "of", "a")
pub const MAX_STOP_WORD_LEN: usize = 2;

/// Split a free-text query into lower-cased search tokens
///
/// Whitespace-delimited, with short tokens dropped as stop-word noise.
/// An empty or all-stop-word query yields an empty token list; callers
/// treat that as "no usable signal", never as an error.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > MAX_STOP_WORD_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize_query("Fitness Influencers Hyderabad");
        assert_eq!(tokens, vec!["fitness", "influencers", "hyderabad"]);
    }

    #[test]
    fn test_tokenize_drops_stop_words() {
        // "in" has length 2 and must be dropped
        let tokens = tokenize_query("fitness influencers in hyderabad");
        assert_eq!(tokens, vec!["fitness", "influencers", "hyderabad"]);
    }

    #[test]
    fn test_tokenize_empty_query() {
        assert!(tokenize_query("").is_empty());
        assert!(tokenize_query("   ").is_empty());
    }

    #[test]
    fn test_tokenize_all_stop_words() {
        assert!(tokenize_query("a an of").is_empty());
    }

    #[test]
    fn test_tokenize_counts_chars_not_bytes() {
        // Two-char token in a multi-byte script is still a stop word
        assert!(tokenize_query("दो").is_empty());
    }
}
