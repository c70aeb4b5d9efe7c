//! Padding utilities.
//!
//! Thin text helpers that sit alongside the decoration engine: [`pad`] adds
//! a fixed number of spacer characters around a string, [`pad_to`] pads up
//! to a target display width. Widths are measured with `unicode-width` so
//! CJK and other wide characters count correctly.

use unicode_width::UnicodeWidthStr;

/// Where padding is placed relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Spacers before the text (right-aligns the text).
    #[default]
    Left,
    /// Spacers after the text (left-aligns the text).
    Right,
    /// Spacers split around the text; an odd count leaves the extra spacer
    /// on the left.
    Center,
    /// Like [`Center`](Alignment::Center) but the extra spacer goes on the
    /// right.
    CenterRight,
}

/// Adds `count` space characters around `text` per the alignment rule.
pub fn pad(text: &str, count: usize, alignment: Alignment) -> String {
    pad_with(text, count, alignment, ' ')
}

/// Adds `count` copies of `spacer` around `text` per the alignment rule.
pub fn pad_with(text: &str, count: usize, alignment: Alignment, spacer: char) -> String {
    if count == 0 {
        return text.to_string();
    }
    let fill = |n: usize| spacer.to_string().repeat(n);
    match alignment {
        Alignment::Left => format!("{}{}", fill(count), text),
        Alignment::Right => format!("{}{}", text, fill(count)),
        Alignment::Center => {
            let left = count - count / 2;
            format!("{}{}{}", fill(left), text, fill(count - left))
        }
        Alignment::CenterRight => {
            let right = count - count / 2;
            format!("{}{}{}", fill(count - right), text, fill(right))
        }
    }
}

/// Pads `text` with spaces up to `width` display columns.
///
/// Text already at or beyond the target width is returned unchanged.
pub fn pad_to(text: &str, width: usize, alignment: Alignment) -> String {
    pad_to_with(text, width, alignment, ' ')
}

/// Pads `text` with `spacer` up to `width` display columns.
pub fn pad_to_with(text: &str, width: usize, alignment: Alignment, spacer: char) -> String {
    let needed = width.saturating_sub(text.width());
    pad_with(text, needed, alignment, spacer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left() {
        assert_eq!(pad("hi", 3, Alignment::Left), "   hi");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad("hi", 3, Alignment::Right), "hi   ");
    }

    #[test]
    fn test_pad_center_extra_goes_left() {
        assert_eq!(pad("hi", 3, Alignment::Center), "  hi ");
        assert_eq!(pad("hi", 4, Alignment::Center), "  hi  ");
    }

    #[test]
    fn test_pad_center_right_extra_goes_right() {
        assert_eq!(pad("hi", 3, Alignment::CenterRight), " hi  ");
        assert_eq!(pad("hi", 4, Alignment::CenterRight), "  hi  ");
    }

    #[test]
    fn test_pad_zero_count() {
        assert_eq!(pad("hi", 0, Alignment::Left), "hi");
    }

    #[test]
    fn test_pad_with_custom_spacer() {
        assert_eq!(pad_with("hi", 2, Alignment::Right, '.'), "hi..");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to("hi", 5, Alignment::Left), "   hi");
        assert_eq!(pad_to("hi", 5, Alignment::Right), "hi   ");
    }

    #[test]
    fn test_pad_to_already_wide_enough() {
        assert_eq!(pad_to("hello", 5, Alignment::Left), "hello");
        assert_eq!(pad_to("hello", 3, Alignment::Left), "hello");
    }

    #[test]
    fn test_pad_to_counts_display_width() {
        // "日本" is 4 columns wide, so only one spacer is needed.
        assert_eq!(pad_to("日本", 5, Alignment::Right), "日本 ");
    }
}
