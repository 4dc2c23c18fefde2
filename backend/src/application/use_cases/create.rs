use crate::application::repositories::PageRepository;
use crate::domain::{DomainResult, Page, PageContent, PageId};

/// Use case for creating a new page in the registry.
///
/// The id is user-chosen and becomes the lookup key. The store's key
/// constraint decides uniqueness; a collision surfaces as `DuplicateId`
/// whether the existing row is active or trashed.
pub struct CreatePage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> CreatePage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Create an active page. Title defaults to the id, content defaults
    /// to empty html/css.
    pub fn execute(
        &mut self,
        id: &str,
        title: Option<String>,
        html: Option<String>,
        css: Option<String>,
    ) -> DomainResult<()> {
        let id = PageId::new(id)?;
        let content = PageContent::new(html.unwrap_or_default(), css.unwrap_or_default());
        self.repository.create(Page::new(id, title, content))
    }
}
