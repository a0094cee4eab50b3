// src/config/registry.rs
//! Identity registry: which prisoners are tracked, in page order.
//!
//! The results page carries no per-prisoner labels around the figures, so the
//! n-th percentage on the page belongs to the n-th entry here. Reordering the
//! registry (or the site reordering its markup) silently reassigns values.

use thiserror::Error;

use super::consts::SEASON_3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub code: String,
    pub name: String,
}

impl Identity {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }

    /// Display label used in the table, e.g. `Yuno (002)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("identity registry is empty")]
    Empty,
    #[error("duplicate identity code: {0}")]
    DuplicateCode(String),
    #[error("bad identity '{0}', expected CODE=NAME")]
    BadEntry(String),
}

/// Ordered, non-empty list of identities with unique codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<Identity>,
}

impl Registry {
    pub fn new(entries: Vec<Identity>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|p| p.code == e.code) {
                return Err(RegistryError::DuplicateCode(e.code.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse `CODE=NAME` specs in order.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, RegistryError> {
        let mut entries = Vec::with_capacity(specs.len());
        for spec in specs {
            let spec = spec.as_ref();
            let (code, name) = spec
                .split_once('=')
                .map(|(c, n)| (c.trim(), n.trim()))
                .filter(|(c, n)| !c.is_empty() && !n.is_empty())
                .ok_or_else(|| RegistryError::BadEntry(s!(spec)))?;
            entries.push(Identity::new(code, name));
        }
        Self::new(entries)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &Identity> { self.entries.iter() }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            entries: SEASON_3.iter().map(|(c, n)| Identity::new(*c, *n)).collect(),
        }
    }
}
