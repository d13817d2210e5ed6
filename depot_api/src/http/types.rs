use nanoid::nanoid;
use serde::Deserialize;
use serde::Serialize;

use crate::theme::ThemeModel;

/// Body of a successful `GET /themes`.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct ThemesResponse {
    pub success: bool,
    pub themes: Vec<ThemeModel>,
}

/// Body of a successful `POST /upload-theme`.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub theme_id: String,
}

/// Uniform failure body for every route.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// The string fields of an upload form. The file part travels separately.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct UploadForm {
    pub theme_name: String,
    pub theme_version: String,
    pub developer_name: String,
    pub description: String,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            theme_name: nanoid!(),
            theme_version: "1.0.0".to_string(),
            developer_name: nanoid!(),
            description: nanoid!(),
        }
    }
}
