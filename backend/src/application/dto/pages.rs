/// Request and response shapes for the page registry endpoints.
///
/// Every response carries the `{success, message?, ...}` envelope the page
/// builder client expects. Domain failures additionally carry a stable
/// `error` kind tag so callers can branch without string-matching messages.
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};

/// One row of the page list view. Content is omitted for list efficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub updated_at: String,
    pub position: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreatePageRequest {
    pub id: String,
    pub title: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
}

/// Query parameters of the fetch endpoint. Presence of `id` selects single
/// mode; otherwise list mode with the requested trash flag (default false).
#[derive(Debug, Default, Deserialize)]
pub struct PagesQuery {
    pub id: Option<String>,
    pub deleted: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SavePageRequest {
    pub id: String,
    pub html: String,
    pub css: String,
}

#[derive(Debug, Deserialize)]
pub struct RenamePageRequest {
    #[serde(rename = "oldId")]
    pub old_id: String,
    #[serde(rename = "newId")]
    pub new_id: String,
    #[serde(rename = "newTitle")]
    pub new_title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DuplicatePageRequest {
    pub id: String,
    #[serde(rename = "newId")]
    pub new_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeletePageRequest {
    pub id: String,
    pub permanent: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RestorePageRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub order: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The plain `{success, message?}` envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn ok() -> Self {
        ActionResponse {
            success: true,
            message: None,
            error: None,
        }
    }

    pub fn ok_with_message(message: impl Into<String>) -> Self {
        ActionResponse {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: &DomainError) -> Self {
        ActionResponse {
            success: false,
            message: Some(error.to_string()),
            error: Some(error.kind().to_string()),
        }
    }

    /// Failure with a caller-facing message that replaces the error's own,
    /// used to keep store detail out of responses.
    pub fn failure_with_message(error: &DomainError, message: impl Into<String>) -> Self {
        ActionResponse {
            success: false,
            message: Some(message.into()),
            error: Some(error.kind().to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageListResponse {
    pub success: bool,
    pub pages: Vec<PageSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageContentResponse {
    pub success: bool,
    pub html: String,
    pub css: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_response_omits_empty_fields() {
        let body = serde_json::to_string(&ActionResponse::ok()).unwrap();
        assert_eq!(body, r#"{"success":true}"#);
    }

    #[test]
    fn test_failure_envelope_carries_kind_tag() {
        let err = DomainError::DuplicateId("about".to_string());
        let body = serde_json::to_value(ActionResponse::failure(&err)).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Page ID already exists.");
        assert_eq!(body["error"], "duplicate_id");
    }

    #[test]
    fn test_rename_request_uses_client_field_names() {
        let req: RenamePageRequest = serde_json::from_str(
            r#"{"oldId":"a","newId":"b","newTitle":"B"}"#,
        )
        .unwrap();
        assert_eq!(req.old_id, "a");
        assert_eq!(req.new_id, "b");
        assert_eq!(req.new_title.as_deref(), Some("B"));
    }
}
