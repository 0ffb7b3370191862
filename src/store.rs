use std::collections::HashMap;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use crate::Error;
use crate::io::{FsProvider, ReadProvider};

/// Keys of one section mapped to their values.
pub type Section = HashMap<String, String>;

/// Parsed INI content: section name to its key-value pairs.
///
/// The empty section name `""` holds keys that appear before the first
/// `[section]` header (and keys under an empty `[]` header).
///
/// Lookups never fail. Use `get` for an `Option`, `get_or` to supply a
/// fallback, or `get_or_empty` when a missing value should read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniStore {
    sections: HashMap<String, Section>,
}

impl IniStore {
    pub fn new() -> Self {
        Self {
            sections: HashMap::new(),
        }
    }

    /// Parse INI text into a fresh store. Never fails on content.
    pub fn parse(text: &str) -> Self {
        crate::parse::parse(text)
    }

    /// Replace the contents of this store with the file at `path`.
    ///
    /// The store is cleared before reading; if the file cannot be read it
    /// stays empty.
    pub fn reload(&mut self, path: &Path) -> Result<(), Error> {
        self.reload_with(path, &FsProvider)
    }

    pub fn reload_with(
        &mut self,
        path: &Path,
        provider: &impl ReadProvider,
    ) -> Result<(), Error> {
        self.clear();
        *self = crate::io::load_with(path, provider)?;
        Ok(())
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(default)
    }

    pub fn get_or_empty(&self, section: &str, key: &str) -> &str {
        self.get_or(section, key, "")
    }

    /// Set `key` in `section`, creating the section if needed. Last write wins.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, keys)| (name.as_str(), keys))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Number of sections holding at least one key.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

impl FromStr for IniStore {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
