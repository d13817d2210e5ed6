use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use depot_api::prelude::*;
use tempfile::TempDir;

use super::DepotState;
use super::build_server;

pub struct DepotTestState {
    pub url: String,
    pub api: DepotApi,
    pub state: DepotState,
    pub themes_dir: PathBuf,
    _tmpdir: TempDir,
}

impl DepotTestState {
    pub async fn new() -> Result<Self> {
        let tmpdir = TempDir::new().unwrap();
        // subdirectory so tests also cover the dir-does-not-exist-yet path
        let themes_dir = tmpdir.path().join("themes");

        let state = DepotState::new(themes_dir.clone());
        let app = build_server(state.clone());

        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:0")).await?;
        let addr = listener.local_addr()?.to_string();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let url = format!("http://{}", addr);
        Ok(Self {
            api: DepotApi::new(url.clone())?,
            url,
            state,
            themes_dir,
            _tmpdir: tmpdir,
        })
    }

    /// Upload a randomly named theme with a small zip payload.
    pub async fn upload_default(&self) -> Result<UploadResponse> {
        self.api
            .upload_theme(&UploadForm::default(), "a.zip", b"0123456789".to_vec())
            .await
    }
}
