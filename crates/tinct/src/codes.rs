//! Static ANSI code tables and escape-sequence constants.
//!
//! These tables are the fixed vocabulary of the decoration engine:
//!
//! - [`TEXT_STYLES`]: rendering attributes (bold, italic, ...) with SGR
//!   codes 0-9, valid for foreground use only
//! - [`TERMINAL_BASE_COLORS`]: the 16 terminal-defined colors with SGR
//!   codes 30-37 (normal) and 90-97 (bright)
//!
//! Background variants reuse the base color codes shifted by
//! [`BACKGROUND_OFFSET`] at emission time; they are not stored separately.

/// Opening bytes of an ANSI escape sequence.
pub const ESCAPE_OPEN: &str = "\x1b[";

/// The reset marker that restores default terminal rendering.
pub const RESET: &str = "\x1b[0m";

/// Code shift applied to base colors when emitted as a background.
pub const BACKGROUND_OFFSET: u8 = 10;

/// Text rendering styles mapped to their SGR codes.
pub const TEXT_STYLES: &[(&str, u8)] = &[
    ("default", 0),
    ("bold", 1),
    ("dim", 2),
    ("italic", 3),
    ("underline", 4),
    ("inverse", 7),
    ("invisible", 8),
    ("strikethrough", 9),
];

/// Terminal-defined base colors mapped to their foreground SGR codes.
pub const TERMINAL_BASE_COLORS: &[(&str, u8)] = &[
    ("term_black", 30),
    ("term_red", 31),
    ("term_green", 32),
    ("term_yellow", 33),
    ("term_blue", 34),
    ("term_magenta", 35),
    ("term_cyan", 36),
    ("term_white", 37),
    ("term_bright_black", 90),
    ("term_bright_red", 91),
    ("term_bright_green", 92),
    ("term_bright_yellow", 93),
    ("term_bright_blue", 94),
    ("term_bright_magenta", 95),
    ("term_bright_cyan", 96),
    ("term_bright_white", 97),
];

/// Looks up a text style by name.
pub fn text_style_code(name: &str) -> Option<u8> {
    lookup(TEXT_STYLES, name)
}

/// Looks up a terminal base color by name.
pub fn base_color_code(name: &str) -> Option<u8> {
    lookup(TERMINAL_BASE_COLORS, name)
}

fn lookup(table: &[(&str, u8)], name: &str) -> Option<u8> {
    table
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_lookup() {
        assert_eq!(text_style_code("bold"), Some(1));
        assert_eq!(text_style_code("strikethrough"), Some(9));
        assert_eq!(text_style_code("default"), Some(0));
        assert_eq!(text_style_code("blink"), None);
    }

    #[test]
    fn test_base_color_lookup() {
        assert_eq!(base_color_code("term_black"), Some(30));
        assert_eq!(base_color_code("term_white"), Some(37));
        assert_eq!(base_color_code("term_bright_black"), Some(90));
        assert_eq!(base_color_code("term_bright_white"), Some(97));
        assert_eq!(base_color_code("term_orange"), None);
    }

    #[test]
    fn test_tables_are_disjoint() {
        for (style, _) in TEXT_STYLES {
            assert_eq!(base_color_code(style), None);
        }
        for (color, _) in TERMINAL_BASE_COLORS {
            assert_eq!(text_style_code(color), None);
        }
    }

    #[test]
    fn test_code_ranges() {
        for (_, code) in TEXT_STYLES {
            assert!(*code <= 9);
        }
        for (_, code) in TERMINAL_BASE_COLORS {
            assert!((30..=37).contains(code) || (90..=97).contains(code));
        }
    }
}
