use anyhow::Result;
use axum::http::HeaderMap;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use depot_api::preset::PRESET_ARCHIVE_NAME;
use depot_api::preset::build_preset_zip;

use super::DepotError;

/// Package the fixed starter theme into a ZIP, built fresh per request.
/// Nothing is persisted.
pub async fn download_preset() -> Result<Response, DepotError> {
    let bytes = match build_preset_zip() {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("preset generation failed: {e:?}");
            return Err(DepotError::internal("Failed to generate preset"));
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        "application/zip"
            .parse()
            .map_err(|_| DepotError::internal("Failed to generate preset"))?,
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", PRESET_ARCHIVE_NAME)
            .parse()
            .map_err(|_| DepotError::internal("Failed to generate preset"))?,
    );

    Ok((headers, bytes).into_response())
}
