//! Brand and category denylist configuration.
//!
//! The built-in denylists match the shop's curated defaults and can be
//! replaced from a TOML file. Either way they are compiled exactly once
//! into normalized membership sets and stay immutable for the lifetime of
//! the process; the pipeline only ever borrows them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;
use crate::transformations::normalize_token;

/// Brands removed from the `brand` column.
const DEFAULT_BRANDS: &[&str] = &[
    "Klimas Sp",
    "Top Marken",
    "EFF EFF",
    "E.u.r.o Tec GmbH",
    "Förch",
    "Meisterling",
    "Beurskens",
    "Fenster-Hammer",
    "EVVA",
    "Hanno",
    "Heicko",
    "K-A-L-M",
    "DIAGER",
    "Medid",
    "Zaunrebell",
    "FENSTER-HAMMER",
    "SCHRAUBEN-HAMMER",
];

/// Names that taint a whole category path when they appear as any segment.
const DEFAULT_CATEGORIES: &[&str] = &[
    "SCREWREBEL",
    "WERA",
    "Klimas Sp",
    "Top Marken",
    "FAMAG",
    "INTRA-TEC",
    "Pica",
    "Burg Wächter",
    "ISEO",
    "BEVER",
    "EFF EFF",
    "ABUS",
    "INDEX",
];

static DEFAULT_BLACKLISTS: Lazy<Blacklists> = Lazy::new(|| BlacklistConfig::default().compile());

/// The process-wide default denylists, built on first use.
pub fn default_blacklists() -> &'static Blacklists {
    &DEFAULT_BLACKLISTS
}

/// Raw denylist entries, as written by a user or shipped as defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlacklistConfig {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self {
            brands: DEFAULT_BRANDS.iter().map(|s| s.to_string()).collect(),
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BlacklistConfig {
    /// Parses a TOML override with `brands` / `categories` string arrays.
    /// Missing keys fall back to the built-in defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads an override file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Compiles the raw entries into normalized membership sets.
    pub fn compile(&self) -> Blacklists {
        Blacklists {
            brands: self.brands.iter().map(|b| normalize_token(b)).collect(),
            categories: self.categories.iter().map(|c| normalize_token(c)).collect(),
        }
    }
}

/// Pre-normalized denylist sets consulted by the blacklist filters.
#[derive(Debug, Clone)]
pub struct Blacklists {
    brands: HashSet<String>,
    categories: HashSet<String>,
}

impl Blacklists {
    /// Membership test for the brand column, insensitive to case,
    /// whitespace and diacritic form.
    pub fn is_blacklisted_brand(&self, raw: &str) -> bool {
        self.brands.contains(&normalize_token(raw))
    }

    /// Membership test for a single category path segment.
    pub fn is_blacklisted_category(&self, raw: &str) -> bool {
        self.categories.contains(&normalize_token(raw))
    }
}
