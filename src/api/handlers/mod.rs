//! API request handlers.

mod notes;
mod system;

#[cfg(test)]
mod system_test;

use serde::Serialize;
use utoipa::ToSchema;

pub use notes::*;
pub use system::*;

/// Response body carrying a human-readable detail message.
///
/// Used both for error responses (404) and for the DELETE confirmation.
#[derive(Serialize, ToSchema)]
pub struct DetailResponse {
    #[schema(example = "Note not found")]
    pub detail: String,
}
