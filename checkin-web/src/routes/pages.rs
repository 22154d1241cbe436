use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, put},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{CheckInView, PageId, PageSession, TimeContext},
    routes::ApiError,
    views::render_page,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(show_page).post(submit_page))
        .route("/:id/draft", put(update_draft))
        .route("/:id/view", get(get_view))
}

#[instrument(name = "GET /", skip(app_state))]
pub async fn open_page(State(app_state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = app_state.pages.open(app_state.clock().now())?;
    let page = page.read().await;

    Ok(Html(render_page(&page)))
}

#[instrument(name = "GET /pages/:id", skip(app_state))]
async fn show_page(
    State(app_state): State<AppState>,
    Path(id): Path<PageId>,
) -> Result<Html<String>, ApiError> {
    let page = app_state.pages.get(id)?;
    let page = page.read().await;

    Ok(Html(render_page(&page)))
}

#[derive(Debug, Deserialize)]
struct CheckInForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    focus: String,
}

#[instrument(name = "POST /pages/:id", skip(app_state, form))]
async fn submit_page(
    State(app_state): State<AppState>,
    Path(id): Path<PageId>,
    Form(form): Form<CheckInForm>,
) -> Result<Redirect, ApiError> {
    let page = app_state.pages.get(id)?;
    let mut page = page.write().await;
    page.submit(form.name, form.focus);

    tracing::info!(
        "Check-in saved on page {} (submitted: {})",
        id,
        page.state.is_submitted()
    );
    Ok(Redirect::to(&format!("/pages/{id}")))
}

#[derive(Debug, Deserialize)]
struct DraftBody {
    name: Option<String>,
    focus: Option<String>,
}

#[instrument(name = "PUT /pages/:id/draft", skip(app_state, body))]
async fn update_draft(
    State(app_state): State<AppState>,
    Path(id): Path<PageId>,
    Json(body): Json<DraftBody>,
) -> Result<Json<PageResponse>, ApiError> {
    let page = app_state.pages.get(id)?;
    let mut page = page.write().await;
    page.update_drafts(body.name, body.focus);

    Ok(Json(PageResponse::from(&*page)))
}

#[instrument(name = "GET /pages/:id/view", skip(app_state))]
async fn get_view(
    State(app_state): State<AppState>,
    Path(id): Path<PageId>,
) -> Result<Json<PageResponse>, ApiError> {
    let page = app_state.pages.get(id)?;
    let page = page.read().await;

    Ok(Json(PageResponse::from(&*page)))
}

/// JSON shape of a page: its raw state plus everything derived from it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageResponse {
    id: PageId,
    time_context: TimeContext,
    name_draft: String,
    focus_draft: String,
    saved_name: String,
    intention: String,
    #[serde(flatten)]
    view: CheckInView,
}

impl From<&PageSession> for PageResponse {
    fn from(page: &PageSession) -> Self {
        Self {
            id: page.id,
            time_context: page.time_context.clone(),
            name_draft: page.state.name_draft.clone(),
            focus_draft: page.state.focus_draft.clone(),
            saved_name: page.state.saved_name.clone(),
            intention: page.state.intention.clone(),
            view: page.view(),
        }
    }
}
