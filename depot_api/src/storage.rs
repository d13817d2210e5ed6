use std::path::PathBuf;

use anyhow::Result;
use nanoid::nanoid;

/// A structure that assumes it's the only reader/writer for a directory
/// of theme blobs.
#[derive(Clone, Debug)]
pub struct ThemeStorage {
    pub storage_path: PathBuf,
}

impl ThemeStorage {
    pub fn new(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }

    fn name_to_path(&self, filename: &str) -> PathBuf {
        #[cfg(debug_assertions)]
        if filename.contains("/") {
            log::warn!("storage expects a filename, not a filepath");
        }
        self.storage_path.join(filename)
    }

    /// Idempotent create of the storage directory.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.storage_path).await?;
        Ok(())
    }

    /// Get a reader for filename in this storage
    pub async fn reader_async(&self, filename: &str) -> Result<tokio::fs::File> {
        let read_path = self.name_to_path(filename);
        Ok(tokio::fs::File::open(read_path).await?)
    }

    /// Write bytes to a temp path inside the storage directory. The blob is
    /// not visible under its final name until `commit_blob`.
    pub async fn stage_blob(&self, bytes: &[u8]) -> Result<PathBuf> {
        self.ensure_dir().await?;
        let temp_path = self.storage_path.join(format!(".staged_{}", nanoid!()));
        tokio::fs::write(&temp_path, bytes).await?;
        Ok(temp_path)
    }

    /// Rename a staged blob into place under its final filename.
    pub async fn commit_blob(&self, staged: PathBuf, filename: &str) -> Result<()> {
        tokio::fs::rename(staged, self.name_to_path(filename)).await?;
        Ok(())
    }

    /// Remove a staged blob that will not be committed.
    pub async fn discard_blob(&self, staged: PathBuf) -> Result<()> {
        tokio::fs::remove_file(staged).await?;
        Ok(())
    }

    /// Remove a committed blob, rolling back an upload whose metadata
    /// append failed.
    pub async fn remove_blob(&self, filename: &str) -> Result<()> {
        tokio::fs::remove_file(self.name_to_path(filename)).await?;
        Ok(())
    }

    pub async fn contains_filename(&self, filename: &str) -> Result<bool> {
        Ok(tokio::fs::try_exists(self.name_to_path(filename)).await?)
    }
}
