pub mod create;
pub mod duplicate;
pub mod lifecycle;
pub mod queries;
pub mod rename;
pub mod reorder;
pub mod save;

pub use create::CreatePage;
pub use duplicate::DuplicatePage;
pub use lifecycle::{PurgePage, RestorePage, TrashPage};
pub use queries::{GetPageContent, ListPages};
pub use rename::RenamePage;
pub use reorder::ReorderPages;
pub use save::SavePageContent;
