//! Image files picked by the user and the attachment built from them.

use std::sync::Arc;

use uuid::Uuid;

/// A file handed over by the host's file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let mime = mime_from_name(&name).map(str::to_string);
        Self {
            name,
            mime,
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_from_name(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Token identifying one upload.
///
/// Completions carrying a token other than the attached image's belong to an
/// image that was removed or replaced and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Local preview of a picked image.
///
/// The URI uses the `bytes://` scheme so renderers can register the bytes
/// under it and load the preview without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub uri: String,
    pub bytes: Arc<[u8]>,
}

impl ImagePreview {
    fn for_file(id: UploadId, file: &ImageFile) -> Self {
        Self {
            uri: format!("bytes://slackfeedback/{}/{}", id, file.name),
            bytes: file.bytes.clone(),
        }
    }
}

/// Image attached to the draft.
///
/// Pending while only the preview exists, ready once the host reports
/// the remote URL. Only ready images are included in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedImage {
    id: UploadId,
    preview: ImagePreview,
    file: Option<ImageFile>,
    url: Option<String>,
}

impl AttachedImage {
    /// A pending image for a freshly picked file.
    pub fn pending(file: ImageFile) -> Self {
        let id = UploadId::new();
        Self {
            id,
            preview: ImagePreview::for_file(id, &file),
            file: Some(file),
            url: None,
        }
    }

    /// Record the remote URL. File metadata is dropped; the preview stays.
    pub fn complete(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
        self.file = None;
    }

    /// Token of the upload started for this image.
    pub fn id(&self) -> UploadId {
        self.id
    }

    pub fn preview(&self) -> &ImagePreview {
        &self.preview
    }

    /// The picked file, present only while the upload is pending.
    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_guessed_from_extension() {
        assert_eq!(ImageFile::new("a.PNG", vec![1u8]).mime.as_deref(), Some("image/png"));
        assert_eq!(ImageFile::new("b.jpeg", vec![1u8]).mime.as_deref(), Some("image/jpeg"));
        assert_eq!(ImageFile::new("noext", vec![1u8]).mime, None);
    }

    #[test]
    fn test_pending_image_has_preview_only() {
        let image = AttachedImage::pending(ImageFile::new("shot.png", vec![1u8, 2, 3]));
        assert!(image.preview().uri.starts_with("bytes://slackfeedback/"));
        assert!(image.preview().uri.ends_with("/shot.png"));
        assert!(image.file().is_some());
        assert!(!image.is_ready());
    }

    #[test]
    fn test_complete_keeps_preview_drops_file() {
        let mut image = AttachedImage::pending(ImageFile::new("shot.png", vec![1u8]));
        let preview = image.preview().clone();
        image.complete("https://x/y.png");

        assert_eq!(image.preview(), &preview);
        assert_eq!(image.url(), Some("https://x/y.png"));
        assert!(image.file().is_none());
        assert!(image.is_ready());
    }

    #[test]
    fn test_previews_are_unique() {
        let file = ImageFile::new("same.png", vec![0u8]);
        let a = AttachedImage::pending(file.clone());
        let b = AttachedImage::pending(file);
        assert_ne!(a.preview().uri, b.preview().uri);
        assert_ne!(a.id(), b.id());
        assert!(a.preview().uri.contains(&a.id().to_string()));
    }
}
