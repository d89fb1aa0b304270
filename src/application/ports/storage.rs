// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Public URL prefix under which stored media is served.
pub const MEDIA_URL: &str = "/media/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFolder {
    Covers,
    Avatars,
}

impl MediaFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFolder::Covers => "covers",
            MediaFolder::Avatars => "avatars",
        }
    }
}

/// A file received from a form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Upload {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persists the upload and returns its path relative to the media root.
    async fn store(&self, folder: MediaFolder, upload: Upload) -> ApplicationResult<String>;
}

/// Builds the public URL of a stored media path.
pub fn media_url(path: &str) -> String {
    format!("{MEDIA_URL}{path}")
}
