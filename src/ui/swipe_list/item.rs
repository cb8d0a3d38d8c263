// SPDX-License-Identifier: MPL-2.0
//! List item records and their validation.

use crate::error::{ItemsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A static display record shown as one swipeable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub content: String,
}

impl ListItem {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// On-disk layout of an items file: a `[[items]]` array of tables.
#[derive(Debug, Deserialize)]
struct ItemsFile {
    #[serde(default)]
    items: Vec<ListItem>,
}

/// The six rows mounted by the demo application.
#[must_use]
pub fn demo_items() -> Vec<ListItem> {
    [
        ("1", "React"),
        ("2", "JavaScript Library"),
        ("3", "React-Pose"),
        ("4", "Animations"),
        ("5", "Material-UI"),
        ("6", "Material Design"),
    ]
    .into_iter()
    .map(|(id, content)| ListItem::new(id, content))
    .collect()
}

/// Checks that every record has a non-empty, unique id.
pub fn validate_items(items: &[ListItem]) -> std::result::Result<(), ItemsError> {
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(ItemsError::EmptyId { index });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ItemsError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

/// Keeps the records that satisfy [`validate_items`], in order, and reports
/// every record that was dropped.
#[must_use]
pub fn sanitize_items(items: Vec<ListItem>) -> (Vec<ListItem>, Vec<ItemsError>) {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    let mut problems = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        if item.id.is_empty() {
            problems.push(ItemsError::EmptyId { index });
        } else if !seen.insert(item.id.clone()) {
            problems.push(ItemsError::DuplicateId(item.id));
        } else {
            kept.push(item);
        }
    }

    (kept, problems)
}

/// Parses and validates the contents of an items file.
pub fn parse_items(content: &str) -> Result<Vec<ListItem>> {
    let file: ItemsFile =
        toml::from_str(content).map_err(|err| ItemsError::Malformed(err.to_string()))?;
    validate_items(&file.items)?;
    Ok(file.items)
}

/// Loads and validates an items file from disk.
pub fn load_items(path: &Path) -> Result<Vec<ListItem>> {
    let content = fs::read_to_string(path)?;
    parse_items(&content)
}
