pub mod pages;

pub use pages::{
    ActionResponse, CreatePageRequest, DeletePageRequest, DuplicatePageRequest, LoginRequest,
    LoginResponse, PageContentResponse, PageListResponse, PageSummary, PagesQuery,
    RenamePageRequest, ReorderRequest, RestorePageRequest, SavePageRequest,
};
