//! SQLite NoteRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::db::{DbError, DbResult, Note, NoteRepository};

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl NoteRepository for SqliteNoteRepository<'_> {
    async fn create(&self, note: &Note) -> DbResult<Note> {
        // The caller's id is discarded; identity is assigned here.
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO note (id, title, content) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&note.title)
            .bind(&note.content)
            .execute(self.pool)
            .await
            .map_err(database_error)?;

        Ok(Note {
            id,
            title: note.title.clone(),
            content: note.content.clone(),
        })
    }

    async fn get(&self, id: &str) -> DbResult<Note> {
        let row = sqlx::query("SELECT id, title, content FROM note WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(database_error)?;

        match row {
            Some(row) => Ok(note_from_row(&row)),
            None => Err(DbError::NotFound {
                entity_type: "Note".to_string(),
                id: id.to_string(),
            }),
        }
    }

    async fn list(&self) -> DbResult<Vec<Note>> {
        let rows = sqlx::query("SELECT id, title, content FROM note")
            .fetch_all(self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn update(&self, note: &Note) -> DbResult<()> {
        let result = sqlx::query("UPDATE note SET title = ?, content = ? WHERE id = ?")
            .bind(&note.title)
            .bind(&note.content)
            .bind(&note.id)
            .execute(self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Note".to_string(),
                id: note.id.clone(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Note".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

fn note_from_row(row: &SqliteRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
    }
}

fn database_error(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}
