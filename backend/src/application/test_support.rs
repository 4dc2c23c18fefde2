/// In-memory repository fake shared by the use case unit tests.
use crate::application::dto::PageSummary;
use crate::application::repositories::PageRepository;
use crate::domain::{DomainError, DomainResult, Entity, Page, PageContent, PageId, PageOrder};

struct StoredPage {
    page: Page,
    // Monotonic stand-in for updated_at; higher means more recent.
    updated_seq: u64,
}

pub struct InMemoryPageRepository {
    rows: Vec<StoredPage>,
    clock: u64,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        InMemoryPageRepository {
            rows: Vec::new(),
            clock: 0,
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn index_of(&self, id: &PageId) -> Option<usize> {
        self.rows.iter().position(|row| row.page.id() == id)
    }

    /// Direct read access for assertions.
    pub fn get(&self, id: &str) -> Option<&Page> {
        let id = PageId::new(id).ok()?;
        self.rows
            .iter()
            .find(|row| row.page.id() == &id)
            .map(|row| &row.page)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl PageRepository for InMemoryPageRepository {
    fn create(&mut self, page: Page) -> DomainResult<()> {
        if self.index_of(page.id()).is_some() {
            return Err(DomainError::DuplicateId(page.id().as_str().to_string()));
        }
        let seq = self.tick();
        self.rows.push(StoredPage {
            page,
            updated_seq: seq,
        });
        Ok(())
    }

    fn find_content(&self, id: &PageId) -> DomainResult<Option<PageContent>> {
        Ok(self
            .index_of(id)
            .map(|i| self.rows[i].page.content().clone()))
    }

    fn list(&self, deleted: bool) -> DomainResult<Vec<PageSummary>> {
        let mut rows: Vec<&StoredPage> = self
            .rows
            .iter()
            .filter(|row| row.page.is_deleted() == deleted)
            .collect();
        rows.sort_by_key(|row| (row.page.position(), std::cmp::Reverse(row.updated_seq)));

        Ok(rows
            .into_iter()
            .map(|row| PageSummary {
                id: row.page.id().as_str().to_string(),
                title: row.page.title().to_string(),
                updated_at: format!("{:020}", row.updated_seq),
                position: row.page.position(),
            })
            .collect())
    }

    fn upsert_content(&mut self, id: &PageId, content: &PageContent) -> DomainResult<()> {
        let seq = self.tick();
        match self.index_of(id) {
            Some(i) => {
                self.rows[i].page.set_content(content.clone());
                self.rows[i].updated_seq = seq;
            }
            None => {
                self.rows.push(StoredPage {
                    page: Page::new(id.clone(), None, content.clone()),
                    updated_seq: seq,
                });
            }
        }
        Ok(())
    }

    fn rename(
        &mut self,
        old_id: &PageId,
        new_id: &PageId,
        new_title: Option<&str>,
    ) -> DomainResult<()> {
        let i = self
            .index_of(old_id)
            .ok_or_else(|| DomainError::NotFound(format!("Page {} not found", old_id)))?;
        if new_id != old_id && self.index_of(new_id).is_some() {
            return Err(DomainError::DuplicateId(new_id.as_str().to_string()));
        }
        self.rows[i]
            .page
            .rename(new_id.clone(), new_title.map(|t| t.to_string()));
        Ok(())
    }

    fn duplicate(&mut self, source_id: &PageId, new_id: &PageId) -> DomainResult<()> {
        if self.index_of(new_id).is_some() {
            return Err(DomainError::DuplicateId(new_id.as_str().to_string()));
        }
        let i = self
            .index_of(source_id)
            .ok_or_else(|| DomainError::NotFound(format!("Page {} not found", source_id)))?;
        let copy = self.rows[i].page.duplicate_as(new_id.clone());
        let seq = self.tick();
        self.rows.push(StoredPage {
            page: copy,
            updated_seq: seq,
        });
        Ok(())
    }

    fn set_deleted(&mut self, id: &PageId, deleted: bool) -> DomainResult<bool> {
        match self.index_of(id) {
            Some(i) => {
                if deleted {
                    self.rows[i].page.trash();
                } else {
                    self.rows[i].page.restore();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&mut self, id: &PageId) -> DomainResult<bool> {
        let before = self.rows.len();
        self.rows.retain(|row| row.page.id() != id);
        Ok(self.rows.len() < before)
    }

    fn set_positions(&mut self, order: &PageOrder) -> DomainResult<()> {
        for (id, position) in order.positions() {
            if let Some(i) = self.index_of(id) {
                self.rows[i].page.set_position(position);
            }
        }
        Ok(())
    }
}
