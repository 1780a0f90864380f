//! Loading attachments from disk.

use std::path::Path;

use carlot_forms::Attachment;
use tracing::debug;

use crate::error::Result;

/// Guesses a MIME type from a file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Reads a file into an [`Attachment`].
pub async fn load_attachment(path: impl AsRef<Path>) -> Result<Attachment> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    debug!(file = %path.display(), len = bytes.len(), "loaded attachment");
    Ok(Attachment::new(file_name, content_type_for(path), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.png")), "image/png");
        assert_eq!(content_type_for(Path::new("a.webp")), "image/webp");
        assert_eq!(
            content_type_for(Path::new("noext")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_load_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("front.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let attachment = load_attachment(&path).await.unwrap();
        assert_eq!(attachment.file_name, "front.png");
        assert_eq!(attachment.content_type, "image/png");
        assert_eq!(attachment.bytes, b"\x89PNG");
    }

    #[tokio::test]
    async fn test_load_missing_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_attachment(dir.path().join("missing.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
