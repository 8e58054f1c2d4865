use std::{path::Path, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
};
use log::{error, warn};
use serde_json::{json, Value};
use tokio::fs;

use crate::services::{
    page::{load_report, render_document, ReportSurface},
    shared::constants::DATA_FILE_MISSING,
};

use super::{errors::ErrorResponse, AppState};

fn json_response<T: serde::Serialize>(
    data: &T,
) -> Result<(StatusCode, HeaderMap, String), StatusCode> {
    let data = serde_json::to_string(data).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let mut headers = HeaderMap::new();
    headers.insert("Content-Type", HeaderValue::from_static("application/json"));
    Ok((StatusCode::OK, headers, data))
}

/// Runs the page-load flow for every request and returns the finished page.
/// Fetch failures end up in the page's status element, not in the status
/// code.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut surface = ReportSurface::new();
    if let Err(err) = load_report(&state.fetcher, &mut surface).await {
        warn!(
            "Serving report page with error from {}: {}",
            state.fetcher.endpoint(),
            err
        );
    }
    Html(render_document(&state.title, &surface))
}

/// Serves the payload file given at startup. Problems with the file are
/// reported through the payload's `error` field.
pub async fn data(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let Some(path) = &state.data_file else {
        return Err(ErrorResponse::new(
            StatusCode::NOT_FOUND,
            "no_data_file",
            "This server was started without a payload file (--data).",
        ));
    };

    let payload = read_payload(path).await;
    json_response(&payload).map_err(|status| {
        ErrorResponse::new(status, "serialization", "Couldn't serialize payload.")
    })
}

async fn read_payload(path: &Path) -> Value {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return json!({ "error": DATA_FILE_MISSING });
    }

    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) => {
            error!("Error reading {}: {}", path.display(), err);
            return json!({ "error": err.to_string() });
        }
    };

    match serde_json::from_str::<Value>(&contents) {
        Ok(payload) => payload,
        Err(err) => {
            error!("Error parsing {}: {}", path.display(), err);
            json!({ "error": err.to_string() })
        }
    }
}
