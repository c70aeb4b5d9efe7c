//! Escape sequence composition.
//!
//! [`apply`] decorates text with a resolved parameter-code group. Fresh text
//! is wrapped in a single escape prefix closed by the reset marker. Text
//! that already starts with an escape prefix is never re-wrapped: the new
//! codes are spliced into the existing non-reset escape sequences instead,
//! growing one prefix's parameter list rather than nesting brackets.
//!
//! ```text
//! apply("hello", [1])                      -> "\x1b[1mhello\x1b[0m"
//! apply("\x1b[1mhello\x1b[0m", [31])       -> "\x1b[1;31mhello\x1b[0m"
//! ```
//!
//! Reset markers (`\x1b[0m`) are left untouched, so decorated spans stay
//! balanced: every non-reset prefix is closed by exactly one reset.

use crate::codes::{ESCAPE_OPEN, RESET};

/// Applies one parameter-code group to `text`.
///
/// With no pre-existing escape prefix the result is
/// `ESC[<codes>m<text>ESC[0m`. With one, every non-reset escape sequence in
/// the text receives the new codes, semicolon-appended before its
/// terminating `m`. An empty code group is a no-op.
pub fn apply(text: &str, codes: &[u8]) -> String {
    if codes.is_empty() {
        return text.to_string();
    }
    let joined = join_codes(codes);
    if has_escape_prefix(text) {
        let mut merged = text.to_string();
        // Reverse order keeps earlier splice offsets valid.
        for &index in splice_points(text).iter().rev() {
            merged.insert_str(index, &format!(";{}", joined));
        }
        merged
    } else {
        format!("{}{}m{}{}", ESCAPE_OPEN, joined, text, RESET)
    }
}

/// Applies a sequence of code groups left to right.
///
/// The first group wraps (or merges into) the text, each later group merges
/// on top of the previous result, so the last-applied group's codes end up
/// appended last within the same bracket.
pub fn apply_all(text: &str, groups: &[Vec<u8>]) -> String {
    groups
        .iter()
        .fold(text.to_string(), |decorated, codes| apply(&decorated, codes))
}

/// Joins a parameter-code group into its wire form, e.g. `[38, 2, 255, 0, 0]`
/// becomes `"38;2;255;0;0"`.
fn join_codes(codes: &[u8]) -> String {
    codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Checks whether `text` already starts with an escape prefix
/// (`ESC[` followed by at least one digit).
fn has_escape_prefix(text: &str) -> bool {
    text.strip_prefix(ESCAPE_OPEN)
        .and_then(|rest| rest.bytes().next())
        .map_or(false, |byte| byte.is_ascii_digit())
}

/// Finds the byte index of the terminating `m` for every complete,
/// non-reset escape sequence in `text`, in ascending order.
fn splice_points(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut points = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == 0x1b && bytes[i + 1] == b'[' {
            if let Some(terminator) = sequence_terminator(bytes, i + 2) {
                if &text[i..=terminator] != RESET {
                    points.push(terminator);
                }
                i = terminator + 1;
                continue;
            }
        }
        i += 1;
    }
    points
}

/// Scans `digit+(;digit+)*m` starting at `i`, returning the index of the
/// terminating `m`, or `None` if the bytes do not form a color/style
/// sequence.
fn sequence_terminator(bytes: &[u8], mut i: usize) -> Option<usize> {
    loop {
        let group_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == group_start {
            return None;
        }
        match bytes.get(i) {
            Some(b'm') => return Some(i),
            Some(b';') => i += 1,
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Wrapping fresh text
    // =========================================================================

    #[test]
    fn test_wrap_single_code() {
        assert_eq!(apply("hello", &[1]), "\x1b[1mhello\x1b[0m");
    }

    #[test]
    fn test_wrap_code_group() {
        assert_eq!(
            apply("hello", &[38, 2, 255, 0, 0]),
            "\x1b[38;2;255;0;0mhello\x1b[0m"
        );
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(apply("", &[1]), "\x1b[1m\x1b[0m");
    }

    #[test]
    fn test_empty_codes_are_a_noop() {
        assert_eq!(apply("hello", &[]), "hello");
        assert_eq!(apply("\x1b[1mhello\x1b[0m", &[]), "\x1b[1mhello\x1b[0m");
    }

    // =========================================================================
    // Merging into existing prefixes
    // =========================================================================

    #[test]
    fn test_merge_into_existing_prefix() {
        assert_eq!(
            apply("\x1b[1mhello\x1b[0m", &[31]),
            "\x1b[1;31mhello\x1b[0m"
        );
    }

    #[test]
    fn test_merge_keeps_reset_untouched() {
        let merged = apply("\x1b[1mhello\x1b[0m", &[31]);
        assert!(merged.ends_with("\x1b[0m"));
        assert_eq!(merged.matches("\x1b[0m").count(), 1);
    }

    #[test]
    fn test_merge_code_group() {
        assert_eq!(
            apply("\x1b[1mhello\x1b[0m", &[48, 5, 208]),
            "\x1b[1;48;5;208mhello\x1b[0m"
        );
    }

    #[test]
    fn test_merge_twice_accumulates() {
        let once = apply("hello", &[1]);
        let twice = apply(&once, &[31]);
        let thrice = apply(&twice, &[4]);
        assert_eq!(thrice, "\x1b[1;31;4mhello\x1b[0m");
    }

    #[test]
    fn test_merge_into_every_non_reset_sequence() {
        // Two decorated spans separated by plain text: both prefixes grow,
        // both resets stay as they are.
        let text = "\x1b[1mone\x1b[0m and \x1b[32mtwo\x1b[0m";
        assert_eq!(
            apply(text, &[4]),
            "\x1b[1;4mone\x1b[0m and \x1b[32;4mtwo\x1b[0m"
        );
    }

    #[test]
    fn test_plain_text_with_inner_decoration_wraps() {
        // No prefix at position zero, so the whole text gets wrapped even
        // though it contains an inner decorated span.
        let text = "say \x1b[1mhi\x1b[0m";
        let decorated = apply(text, &[31]);
        assert!(decorated.starts_with("\x1b[31msay "));
        assert!(decorated.ends_with("\x1b[0m"));
        assert_eq!(decorated.matches("\x1b[0m").count(), 2);
    }

    // =========================================================================
    // Sequential application
    // =========================================================================

    #[test]
    fn test_apply_all_matches_sequential_apply() {
        let groups = vec![vec![1], vec![38, 5, 196]];
        let sequential = apply(&apply("hello", &[1]), &[38, 5, 196]);
        assert_eq!(apply_all("hello", &groups), sequential);
        assert_eq!(apply_all("hello", &groups), "\x1b[1;38;5;196mhello\x1b[0m");
    }

    #[test]
    fn test_apply_all_empty_groups() {
        assert_eq!(apply_all("hello", &[]), "hello");
    }

    // =========================================================================
    // Scanner details
    // =========================================================================

    #[test]
    fn test_prefix_detection() {
        assert!(has_escape_prefix("\x1b[1mhi\x1b[0m"));
        assert!(has_escape_prefix("\x1b[38;5;196mhi\x1b[0m"));
        assert!(!has_escape_prefix("hi"));
        assert!(!has_escape_prefix(""));
        assert!(!has_escape_prefix("\x1b[m"));
        // Prefix must sit at the very start of the string.
        assert!(!has_escape_prefix(" \x1b[1mhi\x1b[0m"));
    }

    #[test]
    fn test_splice_points_skip_resets() {
        let text = "\x1b[1mhi\x1b[0m";
        let points = splice_points(text);
        assert_eq!(points, vec![3]);
    }

    #[test]
    fn test_splice_points_ignore_incomplete_sequences() {
        assert!(splice_points("\x1b[1").is_empty());
        assert!(splice_points("\x1b[;1m").is_empty());
        assert!(splice_points("\x1b[1;m").is_empty());
        // Non-SGR control sequences are not insertion points.
        assert!(splice_points("\x1b[2J").is_empty());
    }
}
