//! Convenience entry points over the resolver and composer.
//!
//! [`Painter`] carries an injected [`NamedColors`] catalog and exposes the
//! common decoration calls: single foreground/background application,
//! combined [`colorize`](Painter::colorize), and chained
//! [`style`](Painter::style). The [`Hue`] extension trait adds one method
//! per text style and terminal base color directly on `str`; these cover a
//! closed enumeration of symbolic codes, need no catalog, and cannot fail.
//!
//! # Example
//!
//! ```rust
//! use tinct::{Hue, Painter, StyleSpec};
//!
//! assert_eq!("hi".bold(), "\x1b[1mhi\x1b[0m");
//! assert_eq!("hi".on_term_green(), "\x1b[42mhi\x1b[0m");
//!
//! let painter = Painter::default();
//! let alert = painter
//!     .style("disk full", &[StyleSpec::from("bold"), StyleSpec::from("tomato")])
//!     .unwrap();
//! assert_eq!(alert, "\x1b[1;38;2;255;99;71mdisk full\x1b[0m");
//! ```

use crate::codes::BACKGROUND_OFFSET;
use crate::compose::{apply, apply_all};
use crate::error::StyleError;
use crate::palette::NamedColors;
use crate::resolve::{resolve, resolve_all, Layer, StyleSpec};

/// Decoration facade bound to a named-color catalog.
#[derive(Debug, Clone)]
pub struct Painter {
    colors: NamedColors,
}

impl Default for Painter {
    /// A painter over the builtin color catalog.
    fn default() -> Self {
        Self::new(NamedColors::builtin().clone())
    }
}

impl Painter {
    /// Creates a painter over the given catalog.
    pub fn new(colors: NamedColors) -> Self {
        Self { colors }
    }

    /// Returns the catalog this painter resolves names against.
    pub fn colors(&self) -> &NamedColors {
        &self.colors
    }

    /// Applies a foreground style to `text`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if the argument does not resolve.
    pub fn fg(&self, text: &str, spec: impl Into<StyleSpec>) -> Result<String, StyleError> {
        let codes = resolve(Layer::Foreground, &spec.into(), &self.colors)?;
        Ok(apply(text, &codes))
    }

    /// Applies a background style to `text`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if the argument does not resolve; text styles
    /// are not valid backgrounds.
    pub fn bg(&self, text: &str, spec: impl Into<StyleSpec>) -> Result<String, StyleError> {
        let codes = resolve(Layer::Background, &spec.into(), &self.colors)?;
        Ok(apply(text, &codes))
    }

    /// Applies an optional foreground and background in one call.
    ///
    /// Both arguments resolve before any text is produced; a failure in
    /// either leaves nothing applied.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingArgument`] when both arguments are
    /// `None`, or the first resolution failure.
    pub fn colorize(
        &self,
        text: &str,
        fg: Option<StyleSpec>,
        bg: Option<StyleSpec>,
    ) -> Result<String, StyleError> {
        if fg.is_none() && bg.is_none() {
            return Err(StyleError::MissingArgument);
        }
        let fg_codes = fg
            .map(|spec| resolve(Layer::Foreground, &spec, &self.colors))
            .transpose()?;
        let bg_codes = bg
            .map(|spec| resolve(Layer::Background, &spec, &self.colors))
            .transpose()?;

        let mut decorated = text.to_string();
        if let Some(codes) = fg_codes {
            decorated = apply(&decorated, &codes);
        }
        if let Some(codes) = bg_codes {
            decorated = apply(&decorated, &codes);
        }
        Ok(decorated)
    }

    /// Applies a chain of foreground styles, left to right.
    ///
    /// All arguments resolve before any text is produced. The first spec
    /// wraps the text, later specs merge their codes into the same escape
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingArgument`] for an empty chain, or the
    /// first per-argument resolution failure.
    pub fn style(&self, text: &str, specs: &[StyleSpec]) -> Result<String, StyleError> {
        let groups = resolve_all(Layer::Foreground, specs, &self.colors)?;
        Ok(apply_all(text, &groups))
    }
}

/// Colors cycled by [`rainbow`], as foreground SGR codes.
const RAINBOW_CYCLE: [u8; 6] = [31, 32, 33, 34, 35, 36];

/// Splits `text` on `delimiter` and cycles each piece through the terminal
/// color sequence red, green, yellow, blue, magenta, cyan, re-joining with
/// the delimiter. An empty delimiter colors per character.
pub fn rainbow(text: &str, delimiter: &str) -> String {
    let pieces: Vec<String> = if delimiter.is_empty() {
        text.chars().map(|c| c.to_string()).collect()
    } else {
        text.split(delimiter).map(str::to_string).collect()
    };
    pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| apply(piece, &[RAINBOW_CYCLE[i % RAINBOW_CYCLE.len()]]))
        .collect::<Vec<_>>()
        .join(delimiter)
}

macro_rules! hue_trait {
    (
        styles { $($style:ident => $style_code:expr),* $(,)? }
        colors { $($color:ident / $on_color:ident => $color_code:expr),* $(,)? }
    ) => {
        /// Per-style and per-color convenience methods on `str`.
        ///
        /// One method per text style (`"x".bold()`), plus foreground and
        /// background methods per terminal base color (`"x".term_red()`,
        /// `"x".on_term_red()`). Each is a thin wrapper over the composer
        /// with a known-valid code, so none of them can fail.
        pub trait Hue {
            $(
                #[doc = concat!("Applies the `", stringify!($style), "` text style.")]
                fn $style(&self) -> String;
            )*
            $(
                #[doc = concat!("Applies `", stringify!($color), "` as the foreground color.")]
                fn $color(&self) -> String;
                #[doc = concat!("Applies `", stringify!($color), "` as the background color.")]
                fn $on_color(&self) -> String;
            )*
        }

        impl Hue for str {
            $(
                fn $style(&self) -> String {
                    apply(self, &[$style_code])
                }
            )*
            $(
                fn $color(&self) -> String {
                    apply(self, &[$color_code])
                }
                fn $on_color(&self) -> String {
                    apply(self, &[$color_code + BACKGROUND_OFFSET])
                }
            )*
        }
    };
}

hue_trait! {
    styles {
        default => 0,
        bold => 1,
        dim => 2,
        italic => 3,
        underline => 4,
        inverse => 7,
        invisible => 8,
        strikethrough => 9,
    }
    colors {
        term_black / on_term_black => 30,
        term_red / on_term_red => 31,
        term_green / on_term_green => 32,
        term_yellow / on_term_yellow => 33,
        term_blue / on_term_blue => 34,
        term_magenta / on_term_magenta => 35,
        term_cyan / on_term_cyan => 36,
        term_white / on_term_white => 37,
        term_bright_black / on_term_bright_black => 90,
        term_bright_red / on_term_bright_red => 91,
        term_bright_green / on_term_bright_green => 92,
        term_bright_yellow / on_term_bright_yellow => 93,
        term_bright_blue / on_term_bright_blue => 94,
        term_bright_magenta / on_term_bright_magenta => 95,
        term_bright_cyan / on_term_bright_cyan => 96,
        term_bright_white / on_term_bright_white => 97,
    }
}
