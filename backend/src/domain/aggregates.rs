/// Domain aggregates
use super::base::Entity;
use super::value_objects::{PageContent, PageId};

/// A Page is the aggregate root of the page registry: a named html+css
/// document built in the visual editor. It is always in exactly one of two
/// states - active (listed) or trashed (recoverable via restore). Rows only
/// leave the registry through an explicit permanent delete, and only the
/// trash view offers that action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    title: String,
    content: PageContent,
    deleted: bool,
    position: i64,
}

impl Page {
    /// Create a new active page. Title falls back to the id when absent.
    pub fn new(id: PageId, title: Option<String>, content: PageContent) -> Self {
        let title = title.unwrap_or_else(|| id.as_str().to_string());
        Page {
            id,
            title,
            content,
            deleted: false,
            position: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Replace the html/css payload. The registry treats content as opaque.
    pub fn set_content(&mut self, content: PageContent) {
        self.content = content;
    }

    /// Change the primary id (and optionally the display title) in place.
    /// Ordering entries move with the row because the key itself changes.
    pub fn rename(&mut self, new_id: PageId, new_title: Option<String>) {
        self.id = new_id;
        if let Some(title) = new_title {
            self.title = title;
        }
    }

    /// Move the page to the trash. Position is left untouched so a later
    /// restore puts the page back at its old numeric slot.
    pub fn trash(&mut self) {
        self.deleted = true;
    }

    /// Bring the page back from the trash. Position is not recalculated;
    /// the next explicit reorder renumbers everything.
    pub fn restore(&mut self) {
        self.deleted = false;
    }

    pub fn set_position(&mut self, position: i64) {
        self.position = position;
    }

    /// Copy only the html/css into a fresh active page under a new id.
    /// Title, trash state and position deliberately do not carry over.
    pub fn duplicate_as(&self, new_id: PageId) -> Page {
        Page::new(new_id, None, self.content.clone())
    }
}

impl Entity for Page {
    type Id = PageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
