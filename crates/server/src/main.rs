use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use roster_core::{
    audit_references, failure_message, process_document, render, render_error, Document,
    ProcessedData, ViewState,
};
use shared::{
    error::{ApiError, ApiException},
    protocol::RawDocument,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, resolve_data_file};

const DOCUMENT_ROUTE: &str = "/data/students.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let data_file = resolve_data_file(&settings.data_file);
    if !data_file.exists() {
        error!(
            data_file = %data_file.display(),
            "data file does not exist yet; document requests will return 404 until it is created"
        );
    }

    let app = build_router(Arc::new(AppState { data_file }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/healthz", get(healthz))
        .route(DOCUMENT_ROUTE, get(data_document))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn data_document(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let bytes = read_data_file(&state.data_file)
        .await
        .map_err(api_error_response)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes))
}

/// Server-side rendition of the roster page, built from the same data file.
async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut document = Document::new();

    match load_processed(&state.data_file).await {
        Ok(data) => {
            audit_references(&data).log();
            let view = ViewState {
                loading: false,
                error: None,
                students: &data.students,
                instructors: &data.instructors,
                courses: &data.courses,
            };
            render(&view, &mut document);
        }
        Err(err) => {
            error!(error = %err, "failed to render roster page");
            render_error(&failure_message(&err), &mut document);
        }
    }

    Html(document.to_html())
}

async fn load_processed(path: &Path) -> Result<ProcessedData, ApiException> {
    let bytes = read_data_file(path).await?;
    let raw = RawDocument::from_slice(&bytes)
        .map_err(|e| ApiException::invalid_document(path, &e))?;
    Ok(process_document(&raw))
}

async fn read_data_file(path: &Path) -> Result<Vec<u8>, ApiException> {
    tokio::fs::read(path)
        .await
        .map_err(|e| ApiException::read_failed(path, &e))
}

fn api_error_response(err: ApiException) -> (StatusCode, Json<ApiError>) {
    error!(path = %err.path.display(), error = %err, "data file request failed");
    let status = StatusCode::from_u16(err.code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiError::from(err)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
