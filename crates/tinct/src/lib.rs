//! # Tinct - ANSI Text Decoration
//!
//! `tinct` decorates text with ANSI escape sequences (foreground and
//! background color, text styles) and composes multiple decorations onto
//! the same text without clobbering codes that are already there.
//!
//! ## Core Concepts
//!
//! - [`resolve`] / [`resolve_all`]: normalize a style argument (palette
//!   index, RGB triple, hex string, catalog name, symbolic style) into an
//!   ANSI parameter-code group
//! - [`apply`] / [`apply_all`]: wrap fresh text in an escape prefix, or
//!   merge new codes into the prefix the text already carries
//! - [`NamedColors`]: injected `name -> hex` catalog, loadable from CSV
//! - [`Painter`]: convenience facade over resolver and composer
//! - [`Hue`]: per-style/per-color methods directly on `str`
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{Hue, Painter};
//!
//! // Symbolic styles and terminal colors, straight off `str`:
//! assert_eq!("error".bold(), "\x1b[1merror\x1b[0m");
//! assert_eq!("error".bold().term_red(), "\x1b[1;31merror\x1b[0m");
//!
//! // Catalog names, hex codes, palette indices through a painter:
//! let painter = Painter::default();
//! assert_eq!(
//!     painter.fg("ok", "forest_green").unwrap(),
//!     "\x1b[38;2;34;139;34mok\x1b[0m"
//! );
//! assert_eq!(painter.bg("ok", 236).unwrap(), "\x1b[48;5;236mok\x1b[0m");
//! ```
//!
//! ## Merging Instead of Nesting
//!
//! Applying a second decoration grows the existing escape prefix rather
//! than wrapping the text in another bracket:
//!
//! ```rust
//! use tinct::{apply, Layer, NamedColors, resolve, StyleSpec};
//!
//! let colors = NamedColors::builtin();
//! let bold = resolve(Layer::Foreground, &StyleSpec::from("bold"), colors).unwrap();
//! let red = resolve(Layer::Foreground, &StyleSpec::from("term_red"), colors).unwrap();
//!
//! let decorated = apply(&apply("hello", &bold), &red);
//! assert_eq!(decorated, "\x1b[1;31mhello\x1b[0m");
//! ```
//!
//! ## Custom Color Catalogs
//!
//! The catalog is plain data injected at construction, so project-specific
//! palettes drop in without touching any global state:
//!
//! ```rust
//! use tinct::{NamedColors, Painter};
//!
//! let painter = Painter::new(NamedColors::from_records([("brand", "#ff6b35")]));
//! assert_eq!(
//!     painter.fg("logo", "brand").unwrap(),
//!     "\x1b[38;2;255;107;53mlogo\x1b[0m"
//! );
//! ```

pub mod codes;
mod compose;
mod error;
mod pad;
mod paint;
mod palette;
mod resolve;

pub use compose::{apply, apply_all};
pub use error::{PaletteError, StyleError};
pub use pad::{pad, pad_to, pad_to_with, pad_with, Alignment};
pub use paint::{rainbow, Hue, Painter};
pub use palette::NamedColors;
pub use resolve::{resolve, resolve_all, Layer, StyleSpec};
