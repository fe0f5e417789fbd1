// src/core/sanitize.rs
use crate::config::consts::{FLAG_MARKER, NBSP};

/// Drop every non-breaking space.
pub fn strip_nbsp(s: &str) -> String {
    s.chars().filter(|&c| c != NBSP).collect()
}

/// Remove note/injury flag markers (`*`) from a player name.
pub fn strip_flag(s: &str) -> String {
    s.chars().filter(|&c| c != FLAG_MARKER).collect::<String>().trim().to_string()
}

/// Collapse any whitespace run (NBSP included) to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
