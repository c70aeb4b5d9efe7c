//! Error types for style resolution and color catalog loading.
//!
//! All resolution failures surface as [`StyleError`] at the point of
//! resolution, never during composition: a chained decoration either
//! resolves completely or produces no output at all.

use std::fmt;
use std::path::PathBuf;

/// Error returned when a style argument cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// No style argument was supplied.
    MissingArgument,

    /// An RGB component list had the wrong arity or an out-of-range value.
    InvalidRgb {
        /// Human-readable rendering of the offending components.
        value: String,
    },

    /// A name matched neither the color catalog, a hex pattern, nor the
    /// symbolic code tables valid for the requested layer.
    UnrecognizedStyle {
        /// The original argument as supplied by the caller.
        name: String,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::MissingArgument => {
                write!(f, "requires at least one style argument")
            }
            StyleError::InvalidRgb { value } => {
                write!(f, "invalid RGB color code: '{}'", value)
            }
            StyleError::UnrecognizedStyle { name } => {
                write!(f, "unrecognized style: '{}'", name)
            }
        }
    }
}

impl std::error::Error for StyleError {}

/// Error type for named-color catalog loading failures.
#[derive(Debug)]
pub enum PaletteError {
    /// The catalog source could not be read.
    Io {
        /// Source file path, when loading from disk.
        path: Option<PathBuf>,
        /// Error message from the reader.
        message: String,
    },

    /// A catalog row could not be parsed.
    Parse {
        /// Source file path, when loading from disk.
        path: Option<PathBuf>,
        /// Error message from the CSV parser.
        message: String,
    },
}

impl PaletteError {
    /// Classifies a `csv::Error` into I/O versus parse failure, attaching
    /// the source path when known.
    pub(crate) fn from_csv(err: csv::Error, path: Option<PathBuf>) -> Self {
        if matches!(err.kind(), csv::ErrorKind::Io(_)) {
            PaletteError::Io {
                path,
                message: err.to_string(),
            }
        } else {
            PaletteError::Parse {
                path,
                message: err.to_string(),
            }
        }
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Io { path, message } => {
                if let Some(p) = path {
                    write!(f, "failed to read color catalog {}: {}", p.display(), message)
                } else {
                    write!(f, "failed to read color catalog: {}", message)
                }
            }
            PaletteError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "failed to parse color catalog {}: {}", p.display(), message)
                } else {
                    write!(f, "failed to parse color catalog: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_display() {
        let err = StyleError::MissingArgument;
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn test_invalid_rgb_display() {
        let err = StyleError::InvalidRgb {
            value: "255, 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid RGB"));
        assert!(msg.contains("255, 0"));
    }

    #[test]
    fn test_unrecognized_style_display() {
        let err = StyleError::UnrecognizedStyle {
            name: "not_a_color".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unrecognized style"));
        assert!(msg.contains("not_a_color"));
    }

    #[test]
    fn test_palette_error_display_with_path() {
        let err = PaletteError::Parse {
            path: Some(PathBuf::from("colors.csv")),
            message: "bad row".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("colors.csv"));
        assert!(msg.contains("bad row"));
    }
}
