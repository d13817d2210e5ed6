use anyhow::Result;
use reqwest::multipart;

use super::types::*;
use crate::DEPOT_URL;
use crate::theme::ThemeModel;

/// Client for the theme depot HTTP surface.
#[derive(Clone, Debug)]
pub struct DepotApi {
    pub url: String,
}

impl Default for DepotApi {
    fn default() -> Self {
        Self {
            url: DEPOT_URL.to_string(),
        }
    }
}

impl DepotApi {
    pub fn new(url: String) -> Result<Self> {
        Ok(Self { url })
    }

    pub fn theme_download_url(&self, id: &str) -> String {
        format!("{}/download-theme/{}", self.url, id)
    }

    pub async fn list_themes(&self) -> Result<Vec<ThemeModel>> {
        let response = reqwest::Client::new()
            .get(format!("{}/themes", self.url))
            .send()
            .await?;
        if response.status().is_success() {
            let data: ThemesResponse = response.json().await?;
            Ok(data.themes)
        } else {
            anyhow::bail!("failed to list themes: {}", response.text().await?);
        }
    }

    pub async fn upload_theme(
        &self,
        form: &UploadForm,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        let multipart_form = multipart::Form::new()
            .part(
                "themeFile",
                multipart::Part::bytes(bytes)
                    .file_name(file_name.to_string())
                    .mime_str("application/zip")?,
            )
            .text("themeName", form.theme_name.clone())
            .text("themeVersion", form.theme_version.clone())
            .text("developerName", form.developer_name.clone())
            .text("description", form.description.clone());
        let response = reqwest::Client::new()
            .post(format!("{}/upload-theme", self.url))
            .multipart(multipart_form)
            .send()
            .await?;
        if response.status().is_success() {
            let data = response.json().await?;
            Ok(data)
        } else {
            anyhow::bail!(
                "failed to upload theme \"{}\": {}",
                form.theme_name,
                response.text().await?
            );
        }
    }

    pub async fn download_theme(&self, id: &str) -> Result<Vec<u8>> {
        let response = reqwest::Client::new()
            .get(self.theme_download_url(id))
            .send()
            .await?;
        if response.status().is_success() {
            let data = response.bytes().await?;
            Ok(data.into())
        } else {
            anyhow::bail!(
                "failed to download theme id \"{}\": {}",
                id,
                response.text().await?
            );
        }
    }

    pub async fn download_preset(&self) -> Result<Vec<u8>> {
        let response = reqwest::Client::new()
            .get(format!("{}/download-preset", self.url))
            .send()
            .await?;
        if response.status().is_success() {
            let data = response.bytes().await?;
            Ok(data.into())
        } else {
            anyhow::bail!("failed to download preset: {}", response.text().await?);
        }
    }
}
