// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Items(ItemsError),
}

/// Problems found in a list of item records supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsError {
    /// The items file could not be parsed.
    Malformed(String),

    /// A record has an empty `id`. `index` is zero-based; messages show it
    /// one-based.
    EmptyId { index: usize },

    /// Two records share the same `id`.
    DuplicateId(String),
}

impl ItemsError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ItemsError::Malformed(_) => "error-items-malformed",
            ItemsError::EmptyId { .. } => "error-items-empty-id",
            ItemsError::DuplicateId(_) => "error-items-duplicate-id",
        }
    }

    /// The single named argument the message for [`ItemsError::i18n_key`] expects.
    pub fn i18n_arg(&self) -> (&'static str, String) {
        match self {
            ItemsError::Malformed(details) => ("details", details.clone()),
            ItemsError::EmptyId { index } => ("index", (index + 1).to_string()),
            ItemsError::DuplicateId(id) => ("id", id.clone()),
        }
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemsError::Malformed(msg) => write!(f, "malformed items file: {}", msg),
            ItemsError::EmptyId { index } => write!(f, "item #{} has an empty id", index + 1),
            ItemsError::DuplicateId(id) => write!(f, "duplicate item id: {}", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Items(e) => write!(f, "Items Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ItemsError> for Error {
    fn from(err: ItemsError) -> Self {
        Error::Items(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
