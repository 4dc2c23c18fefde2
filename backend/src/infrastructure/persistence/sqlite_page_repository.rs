use crate::application::dto::PageSummary;
use crate::application::repositories::PageRepository;
use crate::domain::{DomainError, DomainResult, Entity, Page, PageContent, PageId, PageOrder};
use chrono::Utc;
use rusqlite::{params, Connection, Result as SqliteResult};

/// SQLite-based implementation of the PageRepository trait.
///
/// Id uniqueness is enforced by the pages PRIMARY KEY; every operation that
/// can collide converts the constraint error to `DuplicateId`. Multi-row
/// writes run inside a single transaction.
pub struct SqlitePageRepository {
    conn: Connection,
}

impl SqlitePageRepository {
    /// Create a new repository over an already-initialized connection
    pub fn new(conn: Connection) -> Self {
        SqlitePageRepository { conn }
    }

    /// Create a new in-memory repository (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        let conn = Connection::open_in_memory()?;
        super::schema::initialize_database(&conn)?;
        Ok(SqlitePageRepository { conn })
    }

    /// Create a new file-based repository
    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        let conn = Connection::open(path)?;
        super::schema::initialize_database(&conn)?;
        Ok(SqlitePageRepository { conn })
    }

    fn now() -> String {
        Utc::now().to_rfc3339()
    }

    fn is_key_conflict(error: &rusqlite::Error) -> bool {
        matches!(
            error,
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }

    fn store_error(error: rusqlite::Error) -> DomainError {
        DomainError::Store(error.to_string())
    }
}

impl PageRepository for SqlitePageRepository {
    fn create(&mut self, page: Page) -> DomainResult<()> {
        self.conn
            .execute(
                "INSERT INTO pages (id, title, html, css, deleted, position, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    page.id().as_str(),
                    page.title(),
                    page.content().html(),
                    page.content().css(),
                    page.is_deleted(),
                    page.position(),
                    Self::now(),
                ],
            )
            .map_err(|e| {
                if Self::is_key_conflict(&e) {
                    DomainError::DuplicateId(page.id().as_str().to_string())
                } else {
                    Self::store_error(e)
                }
            })?;
        Ok(())
    }

    fn find_content(&self, id: &PageId) -> DomainResult<Option<PageContent>> {
        let result: Result<(String, String), _> = self.conn.query_row(
            "SELECT html, css FROM pages WHERE id = ?1",
            params![id.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        );

        match result {
            Ok((html, css)) => Ok(Some(PageContent::new(html, css))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Self::store_error(e)),
        }
    }

    fn list(&self, deleted: bool) -> DomainResult<Vec<PageSummary>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, updated_at, position FROM pages
                 WHERE deleted = ?1
                 ORDER BY position ASC, updated_at DESC",
            )
            .map_err(Self::store_error)?;

        let rows = stmt
            .query_map(params![deleted], |row| {
                Ok(PageSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    updated_at: row.get(2)?,
                    position: row.get(3)?,
                })
            })
            .map_err(Self::store_error)?
            .collect::<SqliteResult<Vec<_>>>()
            .map_err(Self::store_error)?;

        Ok(rows)
    }

    fn upsert_content(&mut self, id: &PageId, content: &PageContent) -> DomainResult<()> {
        // Title falls back to the id when the upsert inserts a fresh row
        self.conn
            .execute(
                "INSERT INTO pages (id, title, html, css, deleted, position, updated_at)
                 VALUES (?1, ?1, ?2, ?3, 0, 0, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     html = excluded.html,
                     css = excluded.css,
                     updated_at = excluded.updated_at",
                params![id.as_str(), content.html(), content.css(), Self::now()],
            )
            .map_err(Self::store_error)?;
        Ok(())
    }

    fn rename(
        &mut self,
        old_id: &PageId,
        new_id: &PageId,
        new_title: Option<&str>,
    ) -> DomainResult<()> {
        // Single statement: the key constraint rejects a taken new id and
        // nothing is mutated. Renaming onto the same id only touches title.
        let rows = self
            .conn
            .execute(
                "UPDATE pages SET id = ?1, title = COALESCE(?2, title) WHERE id = ?3",
                params![new_id.as_str(), new_title, old_id.as_str()],
            )
            .map_err(|e| {
                if Self::is_key_conflict(&e) {
                    DomainError::DuplicateId(new_id.as_str().to_string())
                } else {
                    Self::store_error(e)
                }
            })?;

        if rows == 0 {
            return Err(DomainError::NotFound(format!(
                "Page {} not found",
                old_id
            )));
        }
        Ok(())
    }

    fn duplicate(&mut self, source_id: &PageId, new_id: &PageId) -> DomainResult<()> {
        // INSERT..SELECT copies html/css atomically; title defaults to the
        // new id and the copy starts active at the default position.
        let rows = self
            .conn
            .execute(
                "INSERT INTO pages (id, title, html, css, deleted, position, updated_at)
                 SELECT ?1, ?1, html, css, 0, 0, ?2 FROM pages WHERE id = ?3",
                params![new_id.as_str(), Self::now(), source_id.as_str()],
            )
            .map_err(|e| {
                if Self::is_key_conflict(&e) {
                    DomainError::DuplicateId(new_id.as_str().to_string())
                } else {
                    Self::store_error(e)
                }
            })?;

        if rows == 0 {
            return Err(DomainError::NotFound(format!(
                "Page {} not found",
                source_id
            )));
        }
        Ok(())
    }

    fn set_deleted(&mut self, id: &PageId, deleted: bool) -> DomainResult<bool> {
        let rows = self
            .conn
            .execute(
                "UPDATE pages SET deleted = ?1 WHERE id = ?2",
                params![deleted, id.as_str()],
            )
            .map_err(Self::store_error)?;
        Ok(rows > 0)
    }

    fn remove(&mut self, id: &PageId) -> DomainResult<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM pages WHERE id = ?1", params![id.as_str()])
            .map_err(Self::store_error)?;
        Ok(rows > 0)
    }

    fn set_positions(&mut self, order: &PageOrder) -> DomainResult<()> {
        let tx = self.conn.transaction().map_err(Self::store_error)?;
        {
            let mut stmt = tx
                .prepare("UPDATE pages SET position = ?1 WHERE id = ?2")
                .map_err(Self::store_error)?;
            for (id, position) in order.positions() {
                stmt.execute(params![position, id.as_str()])
                    .map_err(Self::store_error)?;
            }
        }
        tx.commit().map_err(Self::store_error)?;
        Ok(())
    }
}
