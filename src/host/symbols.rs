//! Symbol dictionaries: how single characters are spoken per locale.
//!
//! Dictionary files use the tab-separated `symbols:` section format:
//!
//! ```text
//! # comment
//! symbols:
//! .	Punkt	some
//! \#	Raute	most
//! ```
//!
//! Only single-character identifiers are kept. Other sections are skipped.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use regex::Regex;

use super::builtins::builtin_symbol;
use crate::error::{Error, Result};

/// A section header such as `symbols:` or `complexSymbols:`.
static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>[A-Za-z]+):\s*$").unwrap());

/// `identifier<TAB>replacement` followed by optional tab-separated fields.
static ENTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<id>[^\t]+)\t+(?P<replacement>[^\t]*)(?:\t.*)?$").unwrap());

/// Character pronunciations for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<char, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary file's contents.
    pub fn parse(content: &str) -> Result<Self> {
        let mut table = Self::new();
        let mut in_symbols = false;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(caps) = SECTION_PATTERN.captures(line) {
                in_symbols = &caps["name"] == "symbols";
                continue;
            }
            if !in_symbols {
                continue;
            }

            let caps = ENTRY_PATTERN.captures(line).ok_or_else(|| Error::SymbolParse {
                line: index + 1,
                message: format!("expected identifier and replacement, got {:?}", line),
            })?;

            let identifier = unescape(&caps["id"]).map_err(|message| Error::SymbolParse {
                line: index + 1,
                message,
            })?;
            let replacement = caps["replacement"].trim();

            // "-" means "inherit"; multi-character identifiers never match a
            // single selected character.
            if replacement == "-" {
                continue;
            }
            let mut chars = identifier.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                table.insert(ch, replacement);
            }
        }

        Ok(table)
    }

    /// Read and parse a dictionary file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn insert(&mut self, symbol: char, spoken: impl Into<String>) {
        self.symbols.insert(symbol, spoken.into());
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.symbols.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Resolve the escapes allowed in identifiers.
fn unescape(identifier: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(identifier.len());
    let mut chars = identifier.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('#') => out.push('#'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('s') => out.push(' '),
            Some(other) => return Err(format!("unknown escape '\\{}'", other)),
            None => return Err("trailing backslash".to_string()),
        }
    }
    Ok(out)
}

/// Thread-safe symbol tables keyed by locale.
#[derive(Debug, Default)]
pub struct SymbolStore {
    tables: DashMap<String, Arc<SymbolTable>>,
}

impl SymbolStore {
    /// Create a store with only the builtin table.
    pub fn new() -> Self {
        Self {
            tables: DashMap::new(),
        }
    }

    /// Add or replace the table for a locale.
    pub fn insert(&self, locale: &str, table: SymbolTable) {
        self.tables
            .insert(normalize_locale(locale), Arc::new(table));
    }

    /// Get the table registered for exactly this locale.
    pub fn get(&self, locale: &str) -> Option<Arc<SymbolTable>> {
        self.tables
            .get(&normalize_locale(locale))
            .map(|r| Arc::clone(&r))
    }

    /// How `symbol` is spoken in `locale`.
    ///
    /// Looks in the locale's table, then its base language (`de` for `de_CH`),
    /// then the builtin table. Characters without an entry are spoken as
    /// themselves.
    pub fn process_symbol(&self, locale: &str, symbol: char) -> String {
        let locale = normalize_locale(locale);
        let base = locale.split('_').next().unwrap_or(&locale).to_string();

        for candidate in [&locale, &base] {
            if let Some(table) = self.tables.get(candidate) {
                if let Some(spoken) = table.get(symbol) {
                    return spoken.to_string();
                }
            }
        }

        builtin_symbol(symbol)
            .map(str::to_string)
            .unwrap_or_else(|| symbol.to_string())
    }
}

/// `de-CH` and `de_ch` both become `de_CH`.
fn normalize_locale(locale: &str) -> String {
    let locale = locale.replace('-', "_");
    match locale.split_once('_') {
        Some((lang, region)) => format!("{}_{}", lang.to_lowercase(), region.to_uppercase()),
        None => locale.to_lowercase(),
    }
}
