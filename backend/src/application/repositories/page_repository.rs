use crate::application::dto::PageSummary;
use crate::domain::{DomainResult, Page, PageContent, PageId, PageOrder};

/// Repository trait for the page registry.
///
/// The store's primary-key constraint is the source of truth for id
/// uniqueness: implementations must map a key collision to
/// `DomainError::DuplicateId` rather than pre-checking with a racy
/// count query. Multi-statement operations must be atomic.
pub trait PageRepository {
    /// Inserts a new active page. Fails with `DuplicateId` if a row with the
    /// same id exists, active or trashed.
    fn create(&mut self, page: Page) -> DomainResult<()>;

    /// Returns the html/css payload for a page in either lifecycle state,
    /// or `None` if the id is unknown.
    fn find_content(&self, id: &PageId) -> DomainResult<Option<PageContent>>;

    /// Lists summaries of pages with the requested trash flag, ordered by
    /// position ascending with updated_at descending as the tie break.
    fn list(&self, deleted: bool) -> DomainResult<Vec<PageSummary>>;

    /// Updates the content of an existing page, or inserts a fresh active
    /// row when the id is unknown. Bumps the row's updated_at either way.
    fn upsert_content(&mut self, id: &PageId, content: &PageContent) -> DomainResult<()>;

    /// Changes a page's primary id in place, and its title when given.
    /// Fails with `DuplicateId` when the new id is taken by another row,
    /// `NotFound` when the old id is unknown.
    fn rename(
        &mut self,
        old_id: &PageId,
        new_id: &PageId,
        new_title: Option<&str>,
    ) -> DomainResult<()>;

    /// Copies only html/css from the source into a new active row.
    /// Fails with `NotFound` if the source is unknown, `DuplicateId` if the
    /// destination id is taken.
    fn duplicate(&mut self, source_id: &PageId, new_id: &PageId) -> DomainResult<()>;

    /// Flips the trash flag. Position is never touched here. Returns whether
    /// a row with the id existed.
    fn set_deleted(&mut self, id: &PageId, deleted: bool) -> DomainResult<bool>;

    /// Physically removes the row. Irreversible. Returns whether a row with
    /// the id existed.
    fn remove(&mut self, id: &PageId) -> DomainResult<bool>;

    /// Writes each id's index in the order as its new position, atomically.
    /// Ids not present in the store are skipped.
    fn set_positions(&mut self, order: &PageOrder) -> DomainResult<()>;
}
