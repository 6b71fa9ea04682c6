//! Width-aware text helpers for box and footer contents.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of a string in terminal cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_width` cells, marking the cut with `...`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&ch| {
            used += ch.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    out.push_str("...");
    out
}

/// Word-wrap `text` into lines of at most `width` cells.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("Senator A", 20), "Senator A");
        assert_eq!(truncate_to_width("Announced green energy", 10), "Announc...");
        assert_eq!(truncate_to_width("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_wide_chars() {
        let cut = truncate_to_width("議員議員議員", 7);
        assert!(visual_width(&cut) <= 7);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_wrap() {
        let lines = wrap_text("Announced green energy initiative", 16);
        assert_eq!(lines, vec!["Announced green", "energy", "initiative"]);
        assert!(lines.iter().all(|l| visual_width(l) <= 16));
        assert!(wrap_text("anything", 0).is_empty());
    }
}
