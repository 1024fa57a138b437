use std::net::SocketAddr;
use std::sync::Arc;

mod handlers;
mod models;
mod session;
mod state;
mod template;
mod upload;

use askpdf_pdf_mupdf::MupdfBackend;

use session::SessionStore;
use state::{AppState, PageConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let page = PageConfig::from_env();

    // Request bodies may carry the full advisory upload size
    let body_limit = axum::extract::DefaultBodyLimit::max(page.max_upload_mb * 1024 * 1024);

    let state = Arc::new(AppState {
        page,
        sessions: SessionStore::new(),
        backend: Arc::new(MupdfBackend::new()),
    });

    let app = axum::Router::new()
        .route("/", axum::routing::get(handlers::index::index))
        .route("/upload", axum::routing::post(handlers::upload::upload))
        .route("/ask", axum::routing::post(handlers::ask::ask))
        .route("/reset", axum::routing::post(handlers::reset::reset))
        .route(
            "/static/style.css",
            axum::routing::get(template::serve_stylesheet),
        )
        .layer(body_limit)
        .with_state(state);

    let addr: SocketAddr = std::env::var("ASKPDF_BIND")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
