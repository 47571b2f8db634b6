/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

/// Trim and lower-case a label for comparison.
pub(crate) fn normalize_label(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Trim a label and keep at most `max_chars` characters.
/// Counts chars (not bytes) so it never splits a multi-byte UTF-8 sequence.
pub(crate) fn clip_label(input: &str, max_chars: usize) -> String {
    input.trim().chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_label("  Hello World \n"), "hello world");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_short_label_unchanged() {
        assert_eq!(clip_label("short", 30), "short");
    }

    #[test]
    fn test_long_label_clipped() {
        let result = clip_label("this is a very long line of recognised text", 30);
        assert_eq!(result.chars().count(), 30);
        assert_eq!(result, "this is a very long line of re");
    }

    #[test]
    fn test_clip_trims_before_counting() {
        assert_eq!(clip_label("   abc   ", 2), "ab");
    }

    #[test]
    fn test_cjk_safe() {
        // CJK characters are 3 bytes each; byte slicing would panic
        let input = "\u{4F60}\u{597D}\u{4E16}\u{754C}";
        assert_eq!(clip_label(input, 2), "\u{4F60}\u{597D}");
    }

    #[test]
    fn test_zero_max() {
        assert_eq!(clip_label("hello", 0), "");
    }
}
