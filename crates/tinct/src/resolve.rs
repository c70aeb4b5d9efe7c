//! Style argument resolution.
//!
//! Turns a [`StyleSpec`] into a normalized ANSI parameter-code group for a
//! given [`Layer`]. Accepted argument forms:
//!
//! - 256-color palette index: `42`
//! - RGB triple: `(255, 107, 53)` or `[255, 107, 53]`
//! - Catalog color name: `"sky_blue"` (resolved through [`NamedColors`])
//! - Hex code: `"#ff6b35"` or `"#f80"` (3 or 6 digit)
//! - Symbolic name: `"term_red"`, `"bold"` (styles are foreground-only)
//!
//! String arguments are lower-cased and tried in that exact order; the first
//! match wins. Resolution failures are reported eagerly as [`StyleError`]
//! before any text is touched.
//!
//! # Example
//!
//! ```rust
//! use tinct::{resolve, Layer, NamedColors, StyleSpec};
//!
//! let colors = NamedColors::builtin();
//! assert_eq!(
//!     resolve(Layer::Foreground, &StyleSpec::from("#ff0000"), colors).unwrap(),
//!     vec![38, 2, 255, 0, 0],
//! );
//! assert_eq!(
//!     resolve(Layer::Background, &StyleSpec::Index(208), colors).unwrap(),
//!     vec![48, 5, 208],
//! );
//! ```

use crate::codes;
use crate::error::StyleError;
use crate::palette::NamedColors;

/// The layer a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Text color and rendering attributes.
    Foreground,
    /// Background color.
    Background,
}

impl Layer {
    /// Parameter prefix for 256-color palette indices.
    fn palette_prefix(self) -> [u8; 2] {
        match self {
            Layer::Foreground => [38, 5],
            Layer::Background => [48, 5],
        }
    }

    /// Parameter prefix for 24-bit RGB colors.
    fn rgb_prefix(self) -> [u8; 2] {
        match self {
            Layer::Foreground => [38, 2],
            Layer::Background => [48, 2],
        }
    }

    /// Code shift applied to symbolic base codes for this layer.
    fn offset(self) -> u8 {
        match self {
            Layer::Foreground => 0,
            Layer::Background => codes::BACKGROUND_OFFSET,
        }
    }

    /// Symbolic codes valid for this layer: base colors plus text styles
    /// for the foreground, base colors only for the background.
    fn symbolic_code(self, name: &str) -> Option<u8> {
        match self {
            Layer::Foreground => {
                codes::base_color_code(name).or_else(|| codes::text_style_code(name))
            }
            Layer::Background => codes::base_color_code(name),
        }
    }
}

/// One style argument, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSpec {
    /// 256-color palette index.
    Index(u8),
    /// True color RGB components.
    Rgb(u8, u8, u8),
    /// Named color, hex code, or symbolic style name.
    Name(String),
}

impl From<u8> for StyleSpec {
    fn from(index: u8) -> Self {
        StyleSpec::Index(index)
    }
}

impl From<(u8, u8, u8)> for StyleSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        StyleSpec::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for StyleSpec {
    fn from([r, g, b]: [u8; 3]) -> Self {
        StyleSpec::Rgb(r, g, b)
    }
}

impl From<&str> for StyleSpec {
    fn from(name: &str) -> Self {
        StyleSpec::Name(name.to_string())
    }
}

impl From<String> for StyleSpec {
    fn from(name: String) -> Self {
        StyleSpec::Name(name)
    }
}

/// Conversion for loosely-typed component lists, e.g. values deserialized
/// from configuration. Anything other than exactly 3 components in 0-255
/// is rejected.
impl TryFrom<&[i64]> for StyleSpec {
    type Error = StyleError;

    fn try_from(components: &[i64]) -> Result<Self, Self::Error> {
        let invalid = || StyleError::InvalidRgb {
            value: components
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        };
        match components {
            [r, g, b] => {
                let r = u8::try_from(*r).map_err(|_| invalid())?;
                let g = u8::try_from(*g).map_err(|_| invalid())?;
                let b = u8::try_from(*b).map_err(|_| invalid())?;
                Ok(StyleSpec::Rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }
}

/// Resolves a style argument into one ANSI parameter-code group.
///
/// # Errors
///
/// Returns [`StyleError::UnrecognizedStyle`] when a name matches nothing
/// valid for the layer.
pub fn resolve(
    layer: Layer,
    spec: &StyleSpec,
    colors: &NamedColors,
) -> Result<Vec<u8>, StyleError> {
    match spec {
        StyleSpec::Index(index) => {
            let [p0, p1] = layer.palette_prefix();
            Ok(vec![p0, p1, *index])
        }
        StyleSpec::Rgb(r, g, b) => {
            let [p0, p1] = layer.rgb_prefix();
            Ok(vec![p0, p1, *r, *g, *b])
        }
        StyleSpec::Name(name) => resolve_name(layer, name, colors),
    }
}

/// Resolves a chain of style arguments, left to right.
///
/// Each argument resolves independently into its own code group; the whole
/// chain fails before any group is emitted if one argument is invalid.
///
/// # Errors
///
/// Returns [`StyleError::MissingArgument`] for an empty chain, or the first
/// per-argument resolution failure.
pub fn resolve_all(
    layer: Layer,
    specs: &[StyleSpec],
    colors: &NamedColors,
) -> Result<Vec<Vec<u8>>, StyleError> {
    if specs.is_empty() {
        return Err(StyleError::MissingArgument);
    }
    specs.iter().map(|spec| resolve(layer, spec, colors)).collect()
}

fn resolve_name(layer: Layer, name: &str, colors: &NamedColors) -> Result<Vec<u8>, StyleError> {
    let normalized = name.to_lowercase();

    // Catalog names never start with '#', hex codes always do, so the
    // lookup order below is deterministic rather than accidental.
    if let Some(hex) = colors.get(&normalized) {
        return resolve(layer, &StyleSpec::Name(hex.to_string()), colors);
    }

    if let Some((r, g, b)) = rgb_from_hex(&normalized) {
        return resolve(layer, &StyleSpec::Rgb(r, g, b), colors);
    }

    if let Some(code) = layer.symbolic_code(&normalized) {
        return Ok(vec![code + layer.offset()]);
    }

    Err(StyleError::UnrecognizedStyle {
        name: name.to_string(),
    })
}

/// Parses `#RRGGBB` or `#RGB` into RGB components.
///
/// The short form duplicates each digit (`#f80` -> `#ff8800`). Returns
/// `None` for anything that is not a well-formed hex color.
pub(crate) fn rgb_from_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&digits[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&digits[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&digits[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        _ => None,
    }
}
