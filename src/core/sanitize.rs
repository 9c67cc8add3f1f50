// src/core/sanitize.rs

/// Drop the spaces sitting directly in front of each `%`.
/// "10 % chance" → "10% chance". Runs of spaces go too, so a second pass is a no-op.
/// Only U+0020 counts; other whitespace before `%` is kept.
pub fn tighten_percent(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '%' {
            let kept = out.trim_end_matches(' ').len();
            out.truncate(kept);
        }
        out.push(ch);
    }
    out
}
