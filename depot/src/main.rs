use std::path::PathBuf;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::routing::post;
use depot_api::prelude::*;
use tower_http::cors::CorsLayer;

mod download_preset;
mod download_theme;
mod error;
mod list_themes;
mod upload_theme;

#[cfg(test)]
mod tests;

pub use error::DepotError;

// Max 20 MB upload size
const MAX_UPLOAD_SIZE: usize = 20 * 1024 * 1024;
const DEFAULT_THEMES_DIR: &'static str = "./themes";

/// Shared handler state. The metadata index and the blob files live in the
/// same directory, as laid out by the persisted format.
#[derive(Clone)]
pub struct DepotState {
    pub store: ThemeStore,
    pub storage: ThemeStorage,
}

impl DepotState {
    pub fn new(themes_dir: PathBuf) -> Self {
        Self {
            store: ThemeStore::new(themes_dir.clone()),
            storage: ThemeStorage::new(themes_dir),
        }
    }
}

pub fn build_server(state: DepotState) -> Router {
    Router::new()
        .route("/themes", get(list_themes::list_themes))
        .route(
            "/upload-theme",
            post(upload_theme::upload_theme).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
        )
        .route("/download-theme/{id}", get(download_theme::download_theme))
        .route("/download-preset", get(download_preset::download_preset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let themes_dir = std::env::var("THEMES_DIR").unwrap_or(DEFAULT_THEMES_DIR.to_string());
    let state = DepotState::new(PathBuf::from(&themes_dir));
    let app = build_server(state);

    let port = std::env::var("PORT").unwrap_or("3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    log::info!("serving themes from {themes_dir}, listening on port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
