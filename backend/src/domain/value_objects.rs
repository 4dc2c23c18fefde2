/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use std::fmt;

/// Unique identifier for a Page. User-chosen, doubles as the URL/lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation(
                "Page ID cannot be empty".to_string(),
            ));
        }
        Ok(PageId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PageId {}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The html/css payload of a page. Opaque to the registry - never parsed
/// or validated, only stored and echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageContent {
    html: String,
    css: String,
}

impl PageContent {
    pub fn new(html: impl Into<String>, css: impl Into<String>) -> Self {
        PageContent {
            html: html.into(),
            css: css.into(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

impl ValueObject for PageContent {}

/// A full desired display order, as submitted by the page builder's
/// drag-reorder action. Array index becomes the page's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrder(Vec<PageId>);

impl PageOrder {
    pub fn new(ids: Vec<String>) -> DomainResult<Self> {
        if ids.is_empty() {
            return Err(DomainError::Validation(
                "Order array cannot be empty".to_string(),
            ));
        }
        let ids = ids
            .into_iter()
            .map(PageId::new)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(PageOrder(ids))
    }

    pub fn ids(&self) -> &[PageId] {
        &self.0
    }

    /// Iterate ids paired with the position each one should receive.
    pub fn positions(&self) -> impl Iterator<Item = (&PageId, i64)> {
        self.0.iter().zip(0i64..)
    }
}

impl ValueObject for PageOrder {}

/// Role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }
}

impl ValueObject for Role {}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved session identity, injected into handlers by the auth guard
/// instead of each handler reading session state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Identity {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl ValueObject for Identity {}
