use crate::application::repositories::PageRepository;
use crate::domain::{DomainResult, PageContent, PageId};

/// Use case for the builder's Publish action.
///
/// Upsert semantics: content of an existing page is replaced, an unknown id
/// gets a fresh active row. This is deliberate - Publish must succeed even
/// when the page was never explicitly created through the registry.
pub struct SavePageContent<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> SavePageContent<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(&mut self, id: &str, html: String, css: String) -> DomainResult<()> {
        let id = PageId::new(id)?;
        self.repository
            .upsert_content(&id, &PageContent::new(html, css))
    }
}
