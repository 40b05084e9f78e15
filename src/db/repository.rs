//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Methods return `Send` futures so handlers generic over [`Database`]
//! stay spawnable on a multi-threaded runtime.

use std::future::Future;

use crate::db::{DbResult, models::Note};

/// Repository for Note operations.
pub trait NoteRepository {
    /// Persist a new note under a freshly generated id and return the
    /// persisted record.
    ///
    /// Any id on the candidate record is discarded; the store is the
    /// sole authority over identity.
    fn create(&self, note: &Note) -> impl Future<Output = DbResult<Note>> + Send;

    /// Get a note by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Note>> + Send;

    /// Get all notes. No ordering is guaranteed.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;

    /// Overwrite title and content of an existing note, keyed by its id.
    fn update(&self, note: &Note) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a note by ID.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Repositories are handed out per call, borrowing the underlying
/// connection pool, which avoids dynamic dispatch.
pub trait Database: Send + Sync {
    type Notes<'a>: NoteRepository + Send
    where
        Self: 'a;

    /// Ensure the backing schema exists. Idempotent; runs once during
    /// process bootstrap before the server accepts requests.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the note repository.
    fn notes(&self) -> Self::Notes<'_>;
}
