use serde::Deserialize;
use serde::Serialize;

/// A theme record as persisted in the metadata index and returned by the
/// `/themes` endpoint. Records are immutable once written.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ThemeModel {
    pub id: String,
    pub name: String,
    pub version: String,
    pub developer: String,
    pub description: String,
    /// Generated blob name, `theme_<id><ext>`.
    pub filename: String,
    /// ISO-8601, server-assigned at creation.
    pub upload_date: String,
    /// Size of the uploaded blob in bytes.
    pub file_size: u64,
}

impl ThemeModel {
    /// Blob filename for a fresh upload, keeping the extension of the
    /// file the uploader sent (empty if it had none).
    pub fn blob_filename(id: &str, original_name: &str) -> String {
        match std::path::Path::new(original_name).extension() {
            Some(ext) => format!("theme_{}.{}", id, ext.to_string_lossy()),
            None => format!("theme_{}", id),
        }
    }
}
