//! Web form and JSON API.
//!
//! `GET /` serves a one-page form (locator plus title index); submitting it
//! runs the pipeline and renders the selected title and article, or the
//! error. `POST /api/generate` exposes the same run with typed errors.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::{ErrorKind, VidblogError};
use crate::orchestrator::{GenerationResult, Pipeline};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Shared application state.
pub struct AppState {
    pipeline: Pipeline,
}

/// Run the HTTP server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(&settings)?;
    let state = Arc::new(AppState { pipeline });

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Vidblog Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Form", "GET  /");
    Output::kv("Generate (JSON)", "POST /api/generate");
    Output::kv("Health", "GET  /health");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(form_page).post(form_submit))
        .route("/api/generate", axum::routing::post(api_generate))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct GenerateRequest {
    /// YouTube URL or video ID
    locator: String,
    /// 0-based title index, clamped into range
    #[serde(default)]
    pick: i64,
}

/// Form fields arrive as text; a cleared index field submits `pick=`.
#[derive(Deserialize)]
struct FormRequest {
    #[serde(default)]
    locator: String,
    #[serde(default)]
    pick: Option<String>,
}

/// Read the form's title index. Blank means the first title.
fn parse_pick(raw: Option<&str>) -> Result<i64, VidblogError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(text) => text.parse().map_err(|_| {
            VidblogError::InvalidInput(format!("title index must be a whole number, got '{}'", text))
        }),
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    kind: ErrorKind,
    message: String,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::LocatorMalformed | ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::TranscriptUnavailable => StatusCode::NOT_FOUND,
        ErrorKind::EmptyTitles | ErrorKind::Completion => StatusCode::BAD_GATEWAY,
        ErrorKind::Config | ErrorKind::ToolNotFound | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for VidblogError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        (
            status_for(kind),
            Json(ErrorResponse {
                error: ErrorBody {
                    kind,
                    message: self.to_string(),
                },
            }),
        )
            .into_response()
    }
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn api_generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerationResult>, VidblogError> {
    info!("API generate request for {}", req.locator);
    let result = state.pipeline.run(&req.locator, req.pick).await?;
    Ok(Json(result))
}

async fn form_page() -> Html<String> {
    Html(render_page("", 0, ""))
}

async fn form_submit(
    State(state): State<Arc<AppState>>,
    Form(req): Form<FormRequest>,
) -> Html<String> {
    let pick = parse_pick(req.pick.as_deref());
    let shown_pick = pick.as_ref().map_or(0, |p| (*p).max(0));
    let outcome = match pick {
        Ok(pick) => state.pipeline.run(&req.locator, pick).await,
        Err(e) => Err(e),
    };

    let body = match outcome {
        Ok(result) => format!(
            "<h2>{}</h2>\n<article>{}</article>",
            escape_html(&result.selected_title),
            escape_html(&result.article)
        ),
        Err(e) => {
            warn!("Pipeline failed: {}", e);
            format!("<p class=\"error\">Error: {}</p>", escape_html(&e.to_string()))
        }
    };

    Html(render_page(&req.locator, shown_pick, &body))
}

/// Render the form page with an optional result section.
fn render_page(locator: &str, pick: i64, result: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Vidblog</title>
<style>
body {{ font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }}
article {{ white-space: pre-wrap; line-height: 1.5; }}
.error {{ color: #b00020; }}
form button[disabled] {{ opacity: 0.6; }}
</style>
</head>
<body>
<h1>Vidblog</h1>
<p>Enter a YouTube URL or ID, then generate SEO-optimized titles and a full blog post.</p>
<form method="post" action="/" onsubmit="this.querySelector('button').disabled = true; this.querySelector('button').textContent = 'Running pipeline…';">
<label>YouTube URL or ID <input type="text" name="locator" value="{}" required></label>
<label>Pick title # (0-based) <input type="number" name="pick" min="0" step="1" value="{}"></label>
<button type="submit">Generate Blog</button>
</form>
{}
</body>
</html>
"#,
        escape_html(locator),
        pick,
        result
    )
}

/// Escape text for inclusion in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
