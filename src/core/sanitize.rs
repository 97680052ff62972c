// src/core/sanitize.rs

/// Cell text as the site means it: words separated by single spaces.
/// NBSP counts as whitespace (`split_whitespace` is Unicode-aware).
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize_ws("  1.\n\t "), "1.");
        assert_eq!(normalize_ws("a \u{a0} b"), "a b");
        assert_eq!(normalize_ws(""), "");
    }
}
