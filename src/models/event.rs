// src/models/event.rs

//! Change-notification model for the frontier store's stream.
//!
//! These types are consumed read-only: the delivery mechanism constructs
//! them, the processor only filters and decodes. The wire shape is the
//! store's attribute-value encoding, where numbers travel as strings.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::FrontierEntry;

/// A batch of change records delivered by the store stream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<ChangeRecord>,
}

/// One store mutation, as delivered on the stream.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeRecord {
    /// Kind of mutation this record describes
    #[serde(rename = "eventName")]
    pub kind: ChangeKind,

    /// Post-mutation snapshot; only creations carry a usable image
    #[serde(rename = "dynamodb", default)]
    pub change: Option<RecordSnapshot>,
}

impl ChangeRecord {
    /// Decode the post-mutation image into a frontier entry.
    pub fn decode_entry(&self) -> Result<FrontierEntry> {
        let snapshot = self
            .change
            .as_ref()
            .ok_or_else(|| AppError::decode("change record carries no snapshot"))?;
        FrontierEntry::from_image(&snapshot.new_image)
    }
}

/// Store mutation kinds.
///
/// Unrecognized kinds deserialize as `Other`; the processor skips
/// everything that is not a creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ChangeKind {
    #[serde(rename = "INSERT")]
    Created,
    #[serde(rename = "MODIFY")]
    Modified,
    #[serde(rename = "REMOVE")]
    Deleted,
    #[serde(other)]
    Other,
}

/// Snapshot portion of a change record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordSnapshot {
    #[serde(rename = "NewImage", default)]
    pub new_image: HashMap<String, Attribute>,
}

/// A single attribute value in the store's wire encoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribute {
    /// String value
    #[serde(rename = "S", default)]
    string: Option<String>,

    /// Numeric value, transported as a string
    #[serde(rename = "N", default)]
    number: Option<String>,
}

impl Attribute {
    /// Build a string attribute.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string: Some(value.into()),
            number: None,
        }
    }

    /// Build a numeric attribute.
    pub fn number(value: impl ToString) -> Self {
        Self {
            string: None,
            number: Some(value.to_string()),
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        self.string.as_deref()
    }

    pub fn as_number(&self) -> Option<&str> {
        self.number.as_deref()
    }
}
