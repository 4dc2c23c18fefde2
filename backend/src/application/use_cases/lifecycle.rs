use crate::application::repositories::PageRepository;
use crate::domain::{DomainError, DomainResult, PageId};

/// Use case for soft-deleting a page.
///
/// The row stays in the store with `deleted=true` and keeps its position,
/// so a later restore puts it back at its old slot in the order.
pub struct TrashPage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> TrashPage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(&mut self, id: &str) -> DomainResult<()> {
        let id = PageId::new(id)?;
        if !self.repository.set_deleted(&id, true)? {
            return Err(DomainError::NotFound(format!("Page {} not found", id)));
        }
        Ok(())
    }
}

/// Use case for restoring a trashed page.
///
/// Position is not recalculated. The restored page may share a position
/// with pages that took its slot; the updated_at tie break settles display
/// order until the next reorder renumbers everything.
pub struct RestorePage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> RestorePage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(&mut self, id: &str) -> DomainResult<()> {
        let id = PageId::new(id)?;
        if !self.repository.set_deleted(&id, false)? {
            return Err(DomainError::NotFound(format!("Page {} not found", id)));
        }
        Ok(())
    }
}

/// Use case for permanently removing a page. Irreversible, no archival.
pub struct PurgePage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> PurgePage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(&mut self, id: &str) -> DomainResult<()> {
        let id = PageId::new(id)?;
        if !self.repository.remove(&id)? {
            return Err(DomainError::NotFound(format!("Page {} not found", id)));
        }
        Ok(())
    }
}
