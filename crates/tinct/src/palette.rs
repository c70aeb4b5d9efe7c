//! Named-color catalog.
//!
//! [`NamedColors`] maps lower-cased color names to hex strings
//! (`"red" -> "#ff0000"`). The catalog is built once, before any decoration
//! call, and injected into the resolver; there is no global mutable
//! registry. Catalogs can come from:
//!
//! - The builtin catalog embedded at compile time ([`NamedColors::builtin`])
//! - A CSV source with `color_name,hex_code` columns
//!   ([`NamedColors::from_csv_path`], [`NamedColors::from_csv_reader`])
//! - Programmatic construction ([`NamedColors::from_records`],
//!   [`NamedColors::insert`])
//!
//! # Example
//!
//! ```rust
//! use tinct::NamedColors;
//!
//! let mut colors = NamedColors::new();
//! colors.insert("Brand", "#ff6b35");
//! assert_eq!(colors.get("brand"), Some("#ff6b35"));
//! ```

use std::collections::HashMap;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::PaletteError;

/// Catalog CSV embedded at compile time, used by [`NamedColors::builtin`].
const BUILTIN_CATALOG: &str = include_str!("../assets/named_colors.csv");

static BUILTIN: Lazy<NamedColors> = Lazy::new(|| {
    NamedColors::from_csv_reader(BUILTIN_CATALOG.as_bytes())
        .expect("builtin color catalog must parse")
});

/// One row of a catalog CSV source.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    color_name: String,
    hex_code: String,
}

/// Read-only mapping from lower-cased color name to hex string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedColors {
    colors: HashMap<String, String>,
}

impl NamedColors {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the builtin catalog embedded in the crate.
    ///
    /// Parsed once on first access and shared thereafter.
    pub fn builtin() -> &'static NamedColors {
        &BUILTIN
    }

    /// Builds a catalog from `(name, hex)` pairs.
    pub fn from_records<I, N, H>(records: I) -> Self
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
        H: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, hex) in records {
            catalog.insert(name, hex);
        }
        catalog
    }

    /// Loads a catalog from any CSV reader.
    ///
    /// The source must carry a header row with `color_name` and `hex_code`
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError`] if the source cannot be read or a row fails
    /// to deserialize.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, PaletteError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut catalog = Self::new();
        for record in csv_reader.deserialize::<CatalogRecord>() {
            let record = record.map_err(|e| PaletteError::from_csv(e, None))?;
            catalog.insert(record.color_name, record.hex_code.trim().to_string());
        }
        Ok(catalog)
    }

    /// Loads a catalog from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError`] if the file cannot be opened or parsed; the
    /// error carries the offending path.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let mut csv_reader = csv::Reader::from_path(path)
            .map_err(|e| PaletteError::from_csv(e, Some(path.to_path_buf())))?;
        let mut catalog = Self::new();
        for record in csv_reader.deserialize::<CatalogRecord>() {
            let record =
                record.map_err(|e| PaletteError::from_csv(e, Some(path.to_path_buf())))?;
            catalog.insert(record.color_name, record.hex_code.trim().to_string());
        }
        Ok(catalog)
    }

    /// Adds a color to the catalog. Names are stored lower-cased.
    pub fn insert(&mut self, name: impl Into<String>, hex: impl Into<String>) {
        self.colors.insert(name.into().to_lowercase(), hex.into());
    }

    /// Looks up a color by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Checks whether a name exists in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(&name.to_lowercase())
    }

    /// Returns an iterator over all catalog names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Returns the number of cataloged colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
