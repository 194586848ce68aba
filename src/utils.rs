use unicode_width::UnicodeWidthChar;

/// Truncates a string to a display width, appending "..." when it was cut.
/// Width-aware so wide glyphs (CJK, Khmer, etc.) don't overflow list rows.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total_width: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total_width <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }

    out.push_str("...");
    out
}
