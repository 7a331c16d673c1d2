use crate::image_file::interface::{FilePicker, ImageFile};
use std::sync::Mutex;

/// Hands out a queue of files, then reports a dismissed dialog.
pub struct FilePickerFake {
    queue: Mutex<Vec<Result<ImageFile, String>>>,
}

impl FilePickerFake {
    pub fn new(queue: Vec<Result<ImageFile, String>>) -> Self {
        let mut queue = queue;
        queue.reverse();
        Self {
            queue: Mutex::new(queue),
        }
    }
}

impl FilePicker for FilePickerFake {
    fn pick(&self) -> Result<Option<ImageFile>, Box<dyn std::error::Error + Send + Sync>> {
        let next = self.queue.lock().map_err(|e| e.to_string())?.pop();
        match next {
            Some(Ok(file)) => Ok(Some(file)),
            Some(Err(message)) => Err(message.into()),
            None => Ok(None),
        }
    }
}

pub fn photo_jpg() -> ImageFile {
    ImageFile::new("photo.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3])
}

pub fn other_png() -> ImageFile {
    ImageFile::new("other.png", "image/png", vec![0x89, b'P', b'N', b'G', 4, 5, 6])
}
