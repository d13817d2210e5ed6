use anyhow::Result;
use axum::extract::State;
use axum::response::Json as ResponseJson;
use depot_api::prelude::*;

use super::DepotError;
use super::DepotState;

pub async fn list_themes(
    State(state): State<DepotState>,
) -> Result<ResponseJson<ThemesResponse>, DepotError> {
    match state.store.list().await {
        Ok(themes) => Ok(ResponseJson(ThemesResponse {
            success: true,
            themes,
        })),
        Err(e) => {
            log::warn!("failed to load theme index: {e:?}");
            Err(DepotError::internal("Failed to load themes"))
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::tests::DepotTestState;

    #[tokio::test]
    async fn empty_store_lists_empty() -> Result<()> {
        let test = DepotTestState::new().await?;

        // nothing has been uploaded, the themes directory doesn't exist yet
        assert!(!test.themes_dir.exists());
        assert_eq!(test.api.list_themes().await?, vec![]);
        Ok(())
    }

    #[tokio::test]
    async fn list_is_idempotent_and_insertion_ordered() -> Result<()> {
        let test = DepotTestState::new().await?;

        let mut uploaded_ids = vec![];
        for _ in 0..3 {
            let response = test.upload_default().await?;
            uploaded_ids.push(response.theme_id);
        }

        let first = test.api.list_themes().await?;
        let second = test.api.list_themes().await?;
        assert_eq!(first, second);

        let listed_ids = first.into_iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(listed_ids, uploaded_ids);
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_index_is_a_500() -> Result<()> {
        let test = DepotTestState::new().await?;

        tokio::fs::create_dir_all(&test.themes_dir).await?;
        tokio::fs::write(test.themes_dir.join("themes.json"), b"definitely not json").await?;

        let response = reqwest::Client::new()
            .get(format!("{}/themes", test.url))
            .send()
            .await?;
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to load themes");
        Ok(())
    }
}
