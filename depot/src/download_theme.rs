use anyhow::Result;
use axum::body::Body;
use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use tokio_util::io::ReaderStream;

use super::DepotError;
use super::DepotState;

pub async fn download_theme(
    State(state): State<DepotState>,
    Path(id): Path<String>,
) -> Result<Response, DepotError> {
    let theme = match state.store.get_by_id(&id).await {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("failed to read theme index: {e:?}");
            return Err(DepotError::internal("Download failed"));
        }
    };
    let theme = theme.ok_or(DepotError::not_found("Theme not found"))?;

    // metadata exists but the blob may still be missing; no self-healing
    let reader = match state.storage.reader_async(&theme.filename).await {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("failed to open blob \"{}\": {e:?}", theme.filename);
            return Err(DepotError::internal("Download failed"));
        }
    };
    let stream = ReaderStream::new(reader);
    let body = Body::from_stream(stream);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        "application/zip"
            .parse()
            .map_err(|_| DepotError::internal("Download failed"))?,
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", theme.filename)
            .parse()
            .map_err(|_| DepotError::internal("Download failed"))?,
    );

    Ok((headers, body).into_response())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use depot_api::prelude::*;
    use nanoid::nanoid;

    use crate::tests::DepotTestState;

    #[tokio::test]
    async fn download_round_trips_uploaded_bytes() -> Result<()> {
        let test = DepotTestState::new().await?;

        let uploaded = nanoid!().into_bytes();
        let response = test
            .api
            .upload_theme(&UploadForm::default(), "a.zip", uploaded.clone())
            .await?;

        let downloaded = test.api.download_theme(&response.theme_id).await?;
        assert_eq!(downloaded, uploaded);
        Ok(())
    }

    #[tokio::test]
    async fn download_sets_zip_headers() -> Result<()> {
        let test = DepotTestState::new().await?;
        let uploaded = test.upload_default().await?;
        let theme = test
            .state
            .store
            .get_by_id(&uploaded.theme_id)
            .await?
            .unwrap();

        let response = reqwest::Client::new()
            .get(test.api.theme_download_url(&uploaded.theme_id))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["content-type"].to_str()?,
            "application/zip"
        );
        assert_eq!(
            response.headers()["content-disposition"].to_str()?,
            format!("attachment; filename=\"{}\"", theme.filename)
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_a_404() -> Result<()> {
        let test = DepotTestState::new().await?;

        let response = reqwest::Client::new()
            .get(test.api.theme_download_url("1755900000000"))
            .send()
            .await?;
        assert_eq!(response.status(), 404);
        let body: ErrorResponse = response.json().await?;
        assert!(!body.success);
        assert_eq!(body.error, "Theme not found");
        Ok(())
    }

    #[tokio::test]
    async fn missing_blob_with_metadata_is_a_500() -> Result<()> {
        let test = DepotTestState::new().await?;
        let uploaded = test.upload_default().await?;
        let theme = test
            .state
            .store
            .get_by_id(&uploaded.theme_id)
            .await?
            .unwrap();

        tokio::fs::remove_file(test.themes_dir.join(&theme.filename)).await?;

        let response = reqwest::Client::new()
            .get(test.api.theme_download_url(&uploaded.theme_id))
            .send()
            .await?;
        assert_eq!(response.status(), 500);
        let body: ErrorResponse = response.json().await?;
        assert!(!body.success);
        assert_eq!(body.error, "Download failed");
        Ok(())
    }
}
