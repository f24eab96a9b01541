//! Display formatting helpers

/// Compact count: 950, 1.2K, 3.4M (a trailing ".0" is dropped)
pub fn format_count(n: u64) -> String {
    // 999_950 and up would round to "1000K"
    if n >= 999_950 {
        with_suffix(n as f64 / 1_000_000.0, "M")
    } else if n >= 1_000 {
        with_suffix(n as f64 / 1_000.0, "K")
    } else {
        n.to_string()
    }
}

fn with_suffix(value: f64, suffix: &str) -> String {
    let text = format!("{value:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

/// Truncate to `max_chars` characters, appending "..." when shortened
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &title[..byte_idx]),
        None => title.to_string(),
    }
}

/// Round to two decimals and drop trailing zeros: 23.456 -> "23.46", 12.0 -> "12"
pub fn format_decimal(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// "snake_case_name" -> "Snake case name"
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_240), "1.2K");
        assert_eq!(format_count(3_400_000), "3.4M");
        assert_eq!(format_count(12_000_000), "12M");
    }

    #[test]
    fn counts_never_round_up_to_a_thousand_k() {
        assert_eq!(format_count(999_949), "999.9K");
        assert_eq!(format_count(999_950), "1M");
        assert_eq!(format_count(999_999), "1M");
        assert_eq!(format_count(1_000_000), "1M");
    }

    #[test]
    fn titles_truncate_on_char_boundaries() {
        assert_eq!(truncate_title("short", 50), "short");
        let korean = "가".repeat(60);
        let truncated = truncate_title(&korean, 50);
        assert_eq!(truncated.chars().count(), 53);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_title(&"a".repeat(50), 50), "a".repeat(50));
    }

    #[test]
    fn decimals_and_keys() {
        assert_eq!(format_decimal(23.456), "23.46");
        assert_eq!(format_decimal(12.0), "12");
        assert_eq!(format_decimal(7.5), "7.5");
        assert_eq!(humanize_key("views_vs_likes"), "Views vs likes");
        assert_eq!(humanize_key(""), "");
    }
}
