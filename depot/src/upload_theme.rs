use anyhow::Result;
use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::State;
use axum::response::Json as ResponseJson;
use chrono::SecondsFormat;
use chrono::Utc;
use depot_api::prelude::*;

use super::DepotError;
use super::DepotState;

pub async fn upload_theme(
    State(state): State<DepotState>,
    mut multipart: Multipart,
) -> Result<ResponseJson<UploadResponse>, DepotError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut theme_name = None;
    let mut theme_version = None;
    let mut developer_name = None;
    let mut description = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field
            .name()
            .ok_or(DepotError::bad_request(
                "All fields in multipart upload must have names",
            ))?
            .to_string();
        match name.as_str() {
            "themeFile" => {
                let original_name = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                file = Some((original_name, data));
            }
            "themeName" => theme_name = Some(field.text().await?),
            "themeVersion" => theme_version = Some(field.text().await?),
            "developerName" => developer_name = Some(field.text().await?),
            "description" => description = Some(field.text().await?),
            _ => {}
        }
    }

    // Verify we got all required fields, and none of them empty
    let (file, form) = match (file, theme_name, theme_version, developer_name, description) {
        (
            Some(file),
            Some(theme_name),
            Some(theme_version),
            Some(developer_name),
            Some(description),
        ) => (
            file,
            UploadForm {
                theme_name,
                theme_version,
                developer_name,
                description,
            },
        ),
        _ => return Err(DepotError::bad_request("All fields are required")),
    };
    if form.theme_name.is_empty()
        || form.theme_version.is_empty()
        || form.developer_name.is_empty()
        || form.description.is_empty()
    {
        return Err(DepotError::bad_request("All fields are required"));
    }

    match persist_theme(&state, form, file).await {
        Ok(theme_id) => Ok(ResponseJson(UploadResponse {
            success: true,
            message: "Theme uploaded successfully".to_string(),
            theme_id,
        })),
        Err(e) => {
            log::warn!("theme upload failed: {e:?}");
            Err(DepotError::internal("Upload failed"))
        }
    }
}

/// Write the blob and append the metadata record as one logical transaction.
/// The blob is staged under a temp name and renamed into place before the
/// metadata append, so a record is never visible without its blob; if the
/// append fails the blob is removed again. No orphan files either way.
async fn persist_theme(
    state: &DepotState,
    form: UploadForm,
    (original_name, bytes): (String, Bytes),
) -> Result<String> {
    let theme_id = fresh_theme_id();
    let filename = ThemeModel::blob_filename(&theme_id, &original_name);

    let staged = state.storage.stage_blob(&bytes).await?;
    state.storage.commit_blob(staged, &filename).await?;

    let theme = ThemeModel {
        id: theme_id.clone(),
        name: form.theme_name,
        version: form.theme_version,
        developer: form.developer_name,
        description: form.description,
        filename: filename.clone(),
        upload_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        file_size: bytes.len() as u64,
    };
    if let Err(e) = state.store.add(theme).await {
        if let Err(remove_err) = state.storage.remove_blob(&filename).await {
            log::warn!("failed to roll back blob \"{filename}\": {remove_err:?}");
        }
        return Err(e);
    }

    Ok(theme_id)
}
