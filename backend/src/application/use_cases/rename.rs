use crate::application::repositories::PageRepository;
use crate::domain::{DomainResult, PageId};

/// Use case for renaming a page, which changes its primary id in place.
///
/// Everything keyed by the id (ordering entries, builder bookmarks) moves
/// with the row because the key itself changes. Renaming a page onto its
/// own id is allowed and only updates the title.
pub struct RenamePage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> RenamePage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(
        &mut self,
        old_id: &str,
        new_id: &str,
        new_title: Option<String>,
    ) -> DomainResult<()> {
        let old_id = PageId::new(old_id)?;
        let new_id = PageId::new(new_id)?;
        self.repository
            .rename(&old_id, &new_id, new_title.as_deref())
    }
}
