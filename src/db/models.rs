//! Domain models for the notes database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// Hyphenated UUID v4 string used as entity identity.
pub type Id = String;

/// A note: an identified piece of text with a title and an optional body.
///
/// The `id` is assigned by the store on creation and never changes
/// afterwards. Notes form a flat, unordered collection with no
/// relationships between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Id,
    pub title: String,
    pub content: String,
}
