use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use super::auth::MaybeIdentity;
use super::error::AppError;
use super::state::AppState;
use crate::application::dto::{
    ActionResponse, CreatePageRequest, DeletePageRequest, DuplicatePageRequest, LoginRequest,
    LoginResponse, PageContentResponse, PageListResponse, PagesQuery, RenamePageRequest,
    ReorderRequest, RestorePageRequest, SavePageRequest,
};
use crate::application::use_cases::{
    CreatePage, DuplicatePage, GetPageContent, ListPages, PurgePage, RenamePage, ReorderPages,
    RestorePage, SavePageContent, TrashPage,
};
use crate::domain::{DomainError, Identity, PageOrder, Role};

pub async fn create_page_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePageRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let mut repo = state.repo.lock().await;
    CreatePage::new(&mut *repo).execute(&req.id, req.title, req.html, req.css)?;

    info!("created page {}", req.id);
    Ok(Json(ActionResponse::ok_with_message("Page created.")))
}

/// Single endpoint, two modes: `?id=` fetches one page's content, no id
/// lists summaries for the requested trash flag (default: active pages).
pub async fn fetch_pages_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PagesQuery>,
) -> Result<Response, AppError> {
    let repo = state.repo.lock().await;

    match query.id {
        Some(id) => {
            let content = GetPageContent::new(&*repo).execute(&id)?;
            Ok(Json(PageContentResponse {
                success: true,
                html: content.html().to_string(),
                css: content.css().to_string(),
            })
            .into_response())
        }
        None => {
            let pages = ListPages::new(&*repo).execute(query.deleted.unwrap_or(false))?;
            debug!("listed {} pages", pages.len());
            Ok(Json(PageListResponse {
                success: true,
                pages,
            })
            .into_response())
        }
    }
}

pub async fn save_page_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SavePageRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let mut repo = state.repo.lock().await;
    SavePageContent::new(&mut *repo).execute(&req.id, req.html, req.css)?;

    debug!("saved content for page {}", req.id);
    Ok(Json(ActionResponse::ok()))
}

pub async fn rename_page_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RenamePageRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let mut repo = state.repo.lock().await;
    RenamePage::new(&mut *repo).execute(&req.old_id, &req.new_id, req.new_title)?;

    info!("renamed page {} to {}", req.old_id, req.new_id);
    Ok(Json(ActionResponse::ok_with_message("Page renamed.")))
}

pub async fn duplicate_page_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DuplicatePageRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let mut repo = state.repo.lock().await;
    DuplicatePage::new(&mut *repo).execute(&req.id, &req.new_id)?;

    info!("duplicated page {} as {}", req.id, req.new_id);
    Ok(Json(ActionResponse::ok_with_message("Page duplicated.")))
}

pub async fn delete_page_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeletePageRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let mut repo = state.repo.lock().await;

    if req.permanent.unwrap_or(false) {
        PurgePage::new(&mut *repo).execute(&req.id)?;
        info!("permanently deleted page {}", req.id);
    } else {
        TrashPage::new(&mut *repo).execute(&req.id)?;
        info!("moved page {} to trash", req.id);
    }

    Ok(Json(ActionResponse::ok()))
}

pub async fn restore_page_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RestorePageRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let mut repo = state.repo.lock().await;
    RestorePage::new(&mut *repo).execute(&req.id)?;

    info!("restored page {}", req.id);
    Ok(Json(ActionResponse::ok()))
}

/// The one page operation behind the admin gate.
pub async fn reorder_pages_handler(
    State(state): State<Arc<AppState>>,
    MaybeIdentity(identity): MaybeIdentity,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let order = PageOrder::new(req.order)?;

    let mut repo = state.repo.lock().await;
    ReorderPages::new(&mut *repo).execute(identity.as_ref(), &order)?;

    info!("reordered {} pages", order.ids().len());
    Ok(Json(ActionResponse::ok()))
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.username != state.config.admin_username
        || req.password != state.config.admin_password
    {
        return Err(DomainError::Forbidden("Invalid credentials".to_string()).into());
    }

    let identity = Identity::new(req.username, Role::Admin);
    let role = identity.role.as_str().to_string();
    let token = state.sessions.issue(identity);

    info!("admin session opened");
    Ok(Json(LoginResponse {
        success: true,
        token,
        role,
    }))
}
