//! The flag mapping built from CONFIG blocks

use std::collections::HashMap;

use derive_more::Display;

use crate::directive::VERSION_FLAG;

/// The value of a declared flag
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FlagValue {
    /// An ordinary flag
    #[display("{_0}")]
    Bool(bool),
    /// The raw text of the `VERSION` flag
    #[display("{_0:?}")]
    Text(String),
}

impl FlagValue {
    /// Interpret the raw value of a config entry for flag `name`
    ///
    /// `VERSION` keeps its text. Any other flag is true only for the exact
    /// value `TRUE`.
    #[must_use]
    pub fn from_entry(name: &str, raw: &str) -> Self {
        if name == VERSION_FLAG {
            Self::Text(raw.to_string())
        } else {
            Self::Bool(raw == "TRUE")
        }
    }

    /// Whether a block guarded by this flag is uncommented
    ///
    /// Text values count as true unless they are empty.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) => !text.is_empty(),
        }
    }
}

/// Mapping from flag names to their values. The last declaration of a name
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Declared flags
    flags: HashMap<String, FlagValue>,
}

impl Config {
    /// Create an empty [`Config`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: FlagValue) -> Option<FlagValue> {
        self.flags.insert(name.into(), value)
    }

    /// Look up a flag
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// Whether `name` has been declared
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }
}

impl<K: Into<String>> FromIterator<(K, FlagValue)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, FlagValue)>>(iter: I) -> Self {
        let mut config = Self::new();
        config.extend(iter);
        config
    }
}

impl<K: Into<String>> Extend<(K, FlagValue)> for Config {
    fn extend<I: IntoIterator<Item = (K, FlagValue)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
