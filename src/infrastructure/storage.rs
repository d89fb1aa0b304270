use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{MediaFolder, MediaStorage, Upload},
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Stores uploads on disk under `<root>/<folder>/<blake3 of content>.<ext>`.
/// Identical files share one path.
#[derive(Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "bin".to_string())
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, folder: MediaFolder, upload: Upload) -> ApplicationResult<String> {
        let digest = blake3::hash(&upload.bytes).to_hex();
        let relative = format!(
            "{}/{}.{}",
            folder.as_str(),
            &digest.as_str()[..32],
            extension_of(&upload.file_name)
        );

        let dir = self.root.join(folder.as_str());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("media directory: {err}")))?;
        tokio::fs::write(self.root.join(&relative), &upload.bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("media write: {err}")))?;

        tracing::debug!(path = %relative, size = upload.bytes.len(), "stored upload");
        Ok(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn stores_under_folder_with_content_hash() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path());
        let upload = Upload {
            file_name: "Poster.JPG".into(),
            content_type: Some("image/jpeg".into()),
            bytes: Bytes::from_static(b"fake image"),
        };

        let first = storage.store(MediaFolder::Covers, upload.clone()).await.unwrap();
        let second = storage.store(MediaFolder::Covers, upload).await.unwrap();

        assert!(first.starts_with("covers/"));
        assert!(first.ends_with(".jpg"));
        assert_eq!(first, second);
        assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), b"fake image");
    }

    #[test]
    fn odd_extensions_fall_back() {
        assert_eq!(extension_of("noext"), "bin");
        assert_eq!(extension_of("x.p/ng"), "bin");
        assert_eq!(extension_of("a.webp"), "webp");
    }
}
