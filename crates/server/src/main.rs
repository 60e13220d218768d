use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use catalog::{list_categories, ProjectCatalog};
use mail_relay::{ContactSubmission, EmailJsRelay};
use serde::Deserialize;
use shared::{
    domain::{CategoryTag, SubmissionStatus},
    error::{ApiError, ErrorCode},
    protocol::{CategorySummary, ContactFields, ContactResponse, ProjectCard},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod render;

use app_state::AppState;
use config::load_settings;

const MAX_CONTACT_BODY_BYTES: usize = 64 * 1024;

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

#[derive(Debug, Default, Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

impl CategoryQuery {
    fn tag(&self) -> ApiResult<CategoryTag> {
        match self.category.as_deref() {
            None => Ok(CategoryTag::default()),
            Some(raw) => raw.parse().map_err(|e| {
                warn!(category = raw, "unknown category requested");
                (StatusCode::BAD_REQUEST, Json(ApiError::from(e)))
            }),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let endpoint = settings.relay_endpoint()?;
    let credentials = settings.relay_credentials();
    if let Some(field) = credentials.missing_field() {
        warn!(field, "mail relay is not fully configured; contact submissions will fail");
    }

    let state = AppState {
        catalog: Arc::new(ProjectCatalog::showcase()?),
        relay: Arc::new(EmailJsRelay::new(endpoint)),
        credentials,
    };
    let app = build_router(state);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "portfolio listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(index))
        .route("/projects", get(projects_fragment))
        .route("/contact", post(contact_form))
        .route("/api/categories", get(api_categories))
        .route("/api/projects", get(api_projects))
        .route("/api/contact", post(api_contact))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(MAX_CONTACT_BODY_BYTES))
        .with_state(Arc::new(state))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Html<String>> {
    let view = state.catalog.view(q.tag()?);
    Ok(Html(render::page(
        &view,
        SubmissionStatus::Idle,
        &ContactFields::default(),
    )))
}

async fn projects_fragment(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Html<String>> {
    let view = state.catalog.view(q.tag()?);
    Ok(Html(render::projects_section(&view)))
}

async fn api_categories() -> Json<Vec<CategorySummary>> {
    Json(list_categories())
}

async fn api_projects(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CategoryQuery>,
) -> ApiResult<Json<Vec<ProjectCard>>> {
    Ok(Json(state.catalog.view(q.tag()?).cards()))
}

/// Runs one submission for a fresh form instance.
async fn submit_contact(state: &AppState, fields: ContactFields) -> ContactSubmission {
    let mut submission = ContactSubmission::new(fields);
    submission
        .submit(state.relay.as_ref(), &state.credentials)
        .await;
    submission
}

async fn contact_form(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<ContactFields>,
) -> Html<String> {
    let submission = submit_contact(&state, fields).await;
    Html(render::contact_section(
        submission.status(),
        submission.fields(),
    ))
}

async fn api_contact(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<ContactFields>,
) -> Json<ContactResponse> {
    let submission = submit_contact(&state, fields).await;
    Json(ContactResponse {
        status: submission.status(),
    })
}

async fn not_found() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(ErrorCode::NotFound, "route not found")),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
