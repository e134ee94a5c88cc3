//! Static asset serving with directory listings
//!
//! Files are served by tower-http's `ServeDir`, which also answers
//! directories containing an `index.html`. Directories without one get a
//! generated HTML listing instead of a 404.

use axum::{
    body::Body,
    extract::{Request, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::path::{Path, PathBuf};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Fallback handler for every path not claimed by the API
pub async fn serve_static(State(state): State<AppState>, request: Request) -> Response {
    let uri_path = request.uri().path().to_string();

    let Some(relative) = sanitize_path(&uri_path) else {
        return ApiError::NotFound(uri_path).into_response();
    };

    let target = state.public_dir.join(&relative);
    if is_dir(&target).await && !is_file(&target.join("index.html")).await {
        if !uri_path.ends_with('/') {
            return Redirect::permanent(&format!("{}/", uri_path)).into_response();
        }
        return match render_listing(&target, &uri_path).await {
            Ok(html) => Html(html).into_response(),
            Err(e) => ApiError::Io(e).into_response(),
        };
    }

    match ServeDir::new(&state.public_dir).oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

/// Turn a request path into a relative filesystem path
///
/// Segments are percent-decoded. Returns `None` when a segment does not
/// decode to UTF-8, would climb out of the public directory, or smuggles a
/// separator or NUL.
pub fn sanitize_path(uri_path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();

    for segment in uri_path.split('/') {
        let decoded = urlencoding::decode(segment).ok()?;
        match &*decoded {
            "" | "." => continue,
            ".." => return None,
            s if s.contains(['/', '\\', '\0']) => return None,
            s => relative.push(s),
        }
    }

    Some(relative)
}

/// Build the HTML listing for `dir`, linking entries relative to `uri_path`
pub async fn render_listing(dir: &Path, uri_path: &str) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await?.is_dir();
        entries.push((name, is_dir));
    }

    // Directories first, then files, each alphabetically
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    debug!(path = %uri_path, entries = entries.len(), "Rendering directory listing");

    let title = escape_html(uri_path);
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Index of {title}</title></head>\n<body>\n<h1>Index of {title}</h1>\n<ul>\n"
    );

    if uri_path != "/" {
        html.push_str("<li><a href=\"../\">../</a></li>\n");
    }

    for (name, is_dir) in &entries {
        let suffix = if *is_dir { "/" } else { "" };
        let href = urlencoding::encode(name);
        let label = escape_html(name);
        html.push_str(&format!(
            "<li><a href=\"{href}{suffix}\">{label}{suffix}</a></li>\n"
        ));
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    Ok(html)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
