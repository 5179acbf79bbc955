pub fn truncate(s: &str, max_len: usize) -> String {
    if width(s) <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let take = max_len - 1;
    let cut = s.char_indices().nth(take).map(|(idx, _)| idx).unwrap_or(0);

    let mut out = String::with_capacity(cut + '…'.len_utf8());
    out.push_str(&s[..cut]);
    out.push('…');
    out
}

/// Display width in characters.
pub fn width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short() {
        assert_eq!(truncate("cutoff", 10), "cutoff");
    }

    #[test]
    fn truncate_exact() {
        assert_eq!(truncate("cutoff", 6), "cutoff");
    }

    #[test]
    fn truncate_long() {
        assert_eq!(truncate("implicit_solvent", 8), "implici…");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("1.0 Å", 5), "1.0 Å");
        assert_eq!(width("1.0 Å"), 5);
    }

    #[test]
    fn truncate_degenerate_widths() {
        assert_eq!(truncate("md", 0), "");
        assert_eq!(truncate("md", 1), "…");
    }

    #[test]
    fn fitting_text_is_kept_in_narrow_columns() {
        assert_eq!(truncate("B", 1), "B");
        assert_eq!(truncate("", 1), "");
        assert_eq!(truncate("", 0), "");
    }
}
