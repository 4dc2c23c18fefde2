pub mod dto;
pub mod repositories;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types to avoid naming conflicts
pub use dto::{ActionResponse, PageContentResponse, PageListResponse, PageSummary};
pub use repositories::PageRepository;
pub use use_cases::{
    CreatePage, DuplicatePage, GetPageContent, ListPages, PurgePage, RenamePage, ReorderPages,
    RestorePage, SavePageContent, TrashPage,
};
