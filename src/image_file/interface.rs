use std::fmt;
use std::path::Path;
use std::sync::Arc;

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// The binary the user picked. Bytes are shared so the in-flight request and
/// the selection can hold the same buffer.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// MIME type is derived from the extension only; the content is not inspected.
    pub fn from_path(path: &Path, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let mime_type = image::ImageFormat::from_path(path)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME_TYPE);
        Self::new(name, mime_type, bytes)
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

pub trait FilePicker {
    /// `Ok(None)` when the user dismissed the dialog.
    fn pick(&self) -> Result<Option<ImageFile>, Box<dyn std::error::Error + Send + Sync>>;
}
