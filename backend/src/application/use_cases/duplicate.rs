use crate::application::repositories::PageRepository;
use crate::domain::{DomainResult, PageId};

/// Use case for duplicating a page under a new id.
///
/// Only the html/css payload carries over. The copy starts active with the
/// default position and its title falls back to the new id, regardless of
/// the source's state.
pub struct DuplicatePage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> DuplicatePage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(&mut self, source_id: &str, new_id: &str) -> DomainResult<()> {
        let source_id = PageId::new(source_id)?;
        let new_id = PageId::new(new_id)?;
        self.repository.duplicate(&source_id, &new_id)
    }
}
