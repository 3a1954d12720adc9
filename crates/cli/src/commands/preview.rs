use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, Uri, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use folio_core::{Route, TabController};
use folio_generator::assets::{STYLE_CSS, TABS_JS};
use folio_generator::{PageStatus, RenderOptions, render_config_error, render_route};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use serde::Deserialize;
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, warn};

use super::load_site;

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    tab: Option<String>,
}

/// Start preview server with hot reload for local development.
///
/// Pages are rendered on every request from the current site.toml and
/// articles, so edits show up on the next load. A file watcher pushes a
/// reload event to open pages over SSE.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🖼  Starting preview server...");
    println!("   Site: {}", path.display());

    let (config, store) = load_site(&path)?;

    println!("   ✓ Loaded: {}", config.site.title);
    println!("   ✓ Articles: {}", store.articles().len());
    println!("   ✓ Projects: {}", store.projects().len());

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };
    let app = router(state, path.join(&config.content.assets_dir));

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState, assets_dir: PathBuf) -> Router {
    Router::new()
        .route("/_reload", get(sse_handler))
        .route("/style.css", get(stylesheet_handler))
        .route("/tabs.js", get(tabs_script_handler))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Editors leave hidden swap files and `~` backups behind
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    debug!(paths = ?event.paths, "site changed");
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

async fn tabs_script_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], TABS_JS)
}

/// Render whichever page the path resolves to.
///
/// `?tab=<slug>` picks the active home tab, falling back to the configured
/// default for unknown slugs.
async fn page_handler(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let (config, store) = match load_site(&state.site_path) {
        Ok(site) => site,
        Err(e) => {
            let message = format!("{:#}", e);
            warn!(error = %message, "failed to load site");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_config_error(&message)),
            )
                .into_response();
        }
    };

    let route = Route::resolve(uri.path());
    let mut tabs = TabController::new(config.home.default_tab);
    if let Some(slug) = query.tab.as_deref() {
        tabs.select_slug(slug);
    }

    let page = render_route(&route, &config, &store, tabs, RenderOptions { preview: true });
    let status = match page.status {
        PageStatus::Ok => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
    };
    debug!(path = %uri.path(), status = %status, "rendered preview page");

    (status, Html(page.html)).into_response()
}
