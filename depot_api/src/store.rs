use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use nanoid::nanoid;
use tokio::sync::Mutex;

use crate::theme::ThemeModel;

pub const INDEX_FILENAME: &'static str = "themes.json";

/// JSON-document-backed registry of theme records.
///
/// The whole index is one flat array in `<dir>/themes.json`, read in full on
/// every operation. `add` is a read-modify-write serialized through an
/// internal mutex, and the rewrite goes through a temp file and rename so a
/// crash mid-write never leaves a torn index.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ThemeStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILENAME)
    }

    /// All records in insertion order. A missing index file or directory is
    /// "no data yet", not an error. A corrupt index is an error.
    pub async fn list(&self) -> Result<Vec<ThemeModel>> {
        match tokio::fs::read(self.index_path()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(vec![]),
            Err(e) => Err(e.into()),
        }
    }

    /// Append a record and rewrite the index.
    pub async fn add(&self, theme: ThemeModel) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut themes = self.list().await?;
        themes.push(theme);
        self.save(&themes).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ThemeModel>> {
        let themes = self.list().await?;
        Ok(themes.into_iter().find(|theme| theme.id == id))
    }

    async fn save(&self, themes: &[ThemeModel]) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let temp_path = self.dir.join(format!(".{}.{}", INDEX_FILENAME, nanoid!()));
        tokio::fs::write(&temp_path, serde_json::to_vec_pretty(themes)?).await?;
        tokio::fs::rename(&temp_path, self.index_path()).await?;
        Ok(())
    }
}
