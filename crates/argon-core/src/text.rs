//! Text measurement and column fitting.
//!
//! All widths count `char`s. ANSI escape sequences (`\x1b[...m`) are
//! zero-width so colored strings line up with plain ones.

/// Number of decimal digits needed to print indices `0..count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

/// Truncate text to `max_len` characters, marking the cut with an ellipsis.
pub fn truncate_text(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let truncated: String = s.chars().take(max_len - 1).collect();
    format!("{}…", truncated)
}

/// Display width of a string, ignoring ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
            continue;
        }
        if c == '\x1b' {
            in_escape = true;
            continue;
        }
        width += 1;
    }
    width
}

/// Truncate or right-pad `s` so it occupies exactly `width` columns.
pub fn fit(s: &str, width: usize) -> String {
    let text = truncate_text(s, width);
    let padding = width.saturating_sub(display_width(&text));
    format!("{text}{:padding$}", "")
}
