//! Word-count based reading-time estimate.

/// Reading speed assumed for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read `text`, rounded up, never below one.
pub fn reading_minutes(text: &str) -> usize {
    word_count(text).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// `"N min read"`.
pub fn reading_time_label(text: &str) -> String {
    format!("{} min read", reading_minutes(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_whole_minutes() {
        let text = "word ".repeat(201);
        assert_eq!(reading_minutes(&text), 2);
        assert_eq!(reading_minutes(&"word ".repeat(200)), 1);
    }

    #[test]
    fn empty_post_is_one_minute() {
        assert_eq!(reading_time_label("   \n"), "1 min read");
    }

    #[test]
    fn mixed_whitespace_counts_words_once() {
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
    }
}
