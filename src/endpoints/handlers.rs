use crate::endpoints::map::{INDEX_HTML, SCRIPT_JS};
use crate::endpoints::server::AppState;
use crate::models::substrate::SUBSTRATES_DIR;
use crate::models::view::ContainerSize;
use crate::utils::style::render_colorbar;
use crate::viewer::SwapOutcome;
use crate::viewer::picker::Picker;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

#[derive(Serialize)]
struct SubstratesResponse {
    session: String,
    picker: Picker,
    current: Option<SwapOutcome>,
}

pub async fn webmap_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        SCRIPT_JS,
    )
}

pub async fn view_handler(
    Query(container): Query<ContainerSize>,
    State(state): State<Arc<AppState>>,
) -> Response {
    if !container.is_laid_out() {
        return (
            StatusCode::BAD_REQUEST,
            "Map container has no size yet, lay it out before initialising the map",
        )
            .into_response();
    }
    Json(state.viewer.map_view(container)).into_response()
}

pub async fn background_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.viewer.background() {
        Ok(layers) => Json(layers).into_response(),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response(),
    }
}

/// Opens a selection session for one page load. The response carries the
/// session id the page posts its selections to.
pub async fn substrates_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.viewer.open_session();
    let response = SubstratesResponse {
        session: uuid::Uuid::new_v4().to_string(),
        picker: session.picker().clone(),
        current: session.current().cloned(),
    };
    state
        .sessions
        .insert(response.session.clone(), Arc::new(Mutex::new(session)))
        .await;
    debug!(session = %response.session, "Opened substrate session");
    Json(response)
}

pub async fn select_handler(
    Path((session, key)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(session) = state.sessions.get(&session).await else {
        return (StatusCode::NOT_FOUND, format!("Unknown or expired session {session}"))
            .into_response();
    };
    let outcome = session.lock().await.select(&key);
    match outcome {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    }
}

/// Overlay and colour-bar images. Colour bars missing on disk are
/// generated from the substrate palette.
pub async fn substrate_asset_handler(
    Path(file): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let path = format!("{}/{}", SUBSTRATES_DIR, file);
    let err = match state.source.read_asset(&path).await {
        Ok(bytes) => return asset_response(&file, bytes),
        Err(e) => e,
    };

    if !err.is_not_found() {
        warn!(path = %path, error = %err, "Failed to read substrate asset");
        return (StatusCode::NOT_FOUND, err.to_string()).into_response();
    }

    let Some(key) = file
        .strip_prefix("cbar_")
        .and_then(|rest| rest.strip_suffix(".png"))
    else {
        return (StatusCode::NOT_FOUND, err.to_string()).into_response();
    };

    let palette = match state.viewer.manifest().find(key) {
        Some(substrate) => substrate.palette.clone(),
        None => return (StatusCode::NOT_FOUND, err.to_string()).into_response(),
    }
    .or_else(|| state.config.default_palette.clone());

    let (width, height) = (state.config.colorbar_width, state.config.colorbar_height);
    let rendered = state
        .colorbars
        .try_get_with(key.to_string(), async move {
            render_colorbar(palette.as_deref(), width, height).map(Arc::new)
        })
        .await;

    match rendered {
        Ok(bytes) => asset_response(&file, bytes.to_vec()),
        Err(e) => {
            error!(key = %key, error = %e, "Failed to render colour bar");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn asset_response(file: &str, bytes: Vec<u8>) -> Response {
    axum::http::Response::builder()
        .header(header::CONTENT_TYPE, content_type(file))
        .body(axum::body::Body::from(bytes))
        .map(IntoResponse::into_response)
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn content_type(file: &str) -> &'static str {
    match file.rsplit('.').next() {
        Some("png") => "image/png",
        Some("json") => "application/json",
        Some("geojson") => "application/geo+json",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
