use crate::image_file::interface::{FilePicker, ImageFile};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

pub struct FilePickerRfd {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FilePickerRfd {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_picker"),
        }
    }
}

impl FilePicker for FilePickerRfd {
    fn pick(&self) -> Result<Option<ImageFile>, Box<dyn std::error::Error + Send + Sync>> {
        let path = rfd::FileDialog::new()
            .set_title("Upload an image")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file();

        let Some(path) = path else {
            self.logger.info("File dialog dismissed")?;
            return Ok(None);
        };

        let bytes = std::fs::read(&path)
            .map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
        let file = ImageFile::from_path(&path, bytes);

        self.logger.info(&format!(
            "Picked {} ({}, {} bytes)",
            file.name,
            file.mime_type,
            file.bytes.len()
        ))?;

        Ok(Some(file))
    }
}
