use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A route as it appears in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub label: String,
    pub target: String,
}

impl RouteEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty label")]
    EmptyLabel { index: usize },
    #[error("route label {label:?} is used more than once")]
    DuplicateLabel { label: String },
}

/// One navigation entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteDescriptor {
    label: String,
    target: String,
}

impl RouteDescriptor {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Ordered set of routes driving the navigation bar.
///
/// Insertion order is render order and labels are unique, so a lookup by
/// label text never has more than one answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationModel {
    entries: Vec<RouteDescriptor>,
}

impl NavigationModel {
    pub fn new<I, L, T>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut descriptors = Vec::new();

        for (index, (label, target)) in entries.into_iter().enumerate() {
            let label = label.into();
            if label.is_empty() {
                return Err(ValidationError::EmptyLabel { index });
            }
            if !seen.insert(label.clone()) {
                return Err(ValidationError::DuplicateLabel { label });
            }
            descriptors.push(RouteDescriptor {
                label,
                target: target.into(),
            });
        }

        Ok(Self {
            entries: descriptors,
        })
    }

    pub fn entries(&self) -> &[RouteDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RouteDescriptor> {
        self.entries.get(index)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }
}

impl TryFrom<Vec<RouteEntry>> for NavigationModel {
    type Error = ValidationError;

    fn try_from(entries: Vec<RouteEntry>) -> Result<Self, Self::Error> {
        Self::new(
            entries
                .into_iter()
                .map(|entry| (entry.label, entry.target)),
        )
    }
}
