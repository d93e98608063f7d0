//! Construction configuration.
//!
//! Every option has a default; a host can build [`Options`] in code, or load
//! it from a TOML file with [`Options::load_from_file`]. Document-level
//! attributes (`data-page-length`, `data-order`) still take effect when the
//! matching option is left unset.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::document::SortSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Show the result-count label.
    pub info: bool,

    /// Enable sorting via header clicks.
    pub ordering: bool,

    /// Enable pagination.
    pub paging: bool,

    /// Enable the global search box.
    pub searching: bool,

    /// Enable the per-column search row.
    pub column_search: bool,

    /// Initial ordered list of sort requests, applied in sequence at startup
    /// only. When unset, the document's `data-order` attribute is consulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<SortSpec>>,

    /// Rows per page. When unset, the document's `data-page-length`
    /// attribute is consulted, then the builtin default of 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_length: Option<usize>,

    /// Page-size choices offered to the user. The effective page length is
    /// inserted if missing and the list is sorted.
    pub select_item_page: Vec<usize>,

    /// Debounce delay in milliseconds for search input.
    pub debounce_delai: u64,

    /// Maximum edit distance for the fuzzy search fallback. Zero disables
    /// fuzzy matching entirely.
    pub temperature: usize,

    /// Assign odd/even stripe classifications to visible rows.
    pub row_odd_even: bool,

    /// Page-number window radius around the active page.
    pub page_window_radius: usize,

    /// Builtin locale tag ("fr", "en").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Direct translation mapping, overlaid over the builtin strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<HashMap<String, String>>,

    /// JSON file holding a translation mapping. Load failures degrade to the
    /// builtin strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            info: true,
            ordering: true,
            paging: true,
            searching: true,
            column_search: true,
            order: None,
            page_length: None,
            select_item_page: vec![10, 20, 30],
            debounce_delai: 300,
            temperature: 1,
            row_odd_even: true,
            page_window_radius: 2,
            language: None,
            translation: None,
            translation_file: None,
        }
    }
}

impl Options {
    /// Load options from a TOML file. Unknown keys are ignored; missing keys
    /// fall back to their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading options file {}", path.display()))?;
        let options: Options = toml::from_str(&contents)
            .with_context(|| format!("parsing options file {}", path.display()))?;
        Ok(options)
    }
}
