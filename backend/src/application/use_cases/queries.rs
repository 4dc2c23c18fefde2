use crate::application::dto::PageSummary;
use crate::application::repositories::PageRepository;
use crate::domain::{DomainError, DomainResult, PageContent, PageId};

/// Use case for listing page summaries.
///
/// Returns active pages by default, or the trash view when asked. Content
/// is omitted; the builder fetches it per page when one is opened.
pub struct ListPages<'a, R: PageRepository> {
    repository: &'a R,
}

impl<'a, R: PageRepository> ListPages<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, deleted: bool) -> DomainResult<Vec<PageSummary>> {
        self.repository.list(deleted)
    }
}

/// Use case for fetching the html/css payload of a single page.
pub struct GetPageContent<'a, R: PageRepository> {
    repository: &'a R,
}

impl<'a, R: PageRepository> GetPageContent<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Content is returned for trashed pages too; the trash view previews
    /// them the same way.
    pub fn execute(&self, id: &str) -> DomainResult<PageContent> {
        let id = PageId::new(id)?;
        self.repository
            .find_content(&id)?
            .ok_or_else(|| DomainError::NotFound(format!("Page {} not found", id)))
    }
}
