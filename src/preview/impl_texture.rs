use crate::image_file::interface::ImageFile;
use crate::library::logger::interface::Logger;
use crate::preview::interface::{PreviewHandle, PreviewRegistry};
use eframe::egui;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Largest edge uploaded to the GPU; bigger images are downscaled for display.
pub const MAX_PREVIEW_SIZE: u32 = 2048;

/// Backs each handle with an egui texture. The texture is freed when its
/// entry is removed, since egui drops a texture with its last handle.
pub struct PreviewRegistryTexture {
    ctx: egui::Context,
    logger: Arc<dyn Logger + Send + Sync>,
    next_id: AtomicU64,
    // `None` marks a file that could not be decoded as an image.
    textures: Mutex<HashMap<u64, Option<egui::TextureHandle>>>,
}

impl PreviewRegistryTexture {
    pub fn new(ctx: egui::Context, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            ctx,
            logger: logger.with_namespace("preview"),
            next_id: AtomicU64::new(1),
            textures: Mutex::new(HashMap::new()),
        }
    }

    pub fn texture(&self, handle: &PreviewHandle) -> Option<egui::TextureHandle> {
        self.textures
            .lock()
            .ok()
            .and_then(|textures| textures.get(&handle.id()).cloned().flatten())
    }

    fn decode(&self, id: u64, file: &ImageFile) -> Option<egui::TextureHandle> {
        let decoded = match image::load_from_memory(&file.bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Cannot decode {} for preview: {}", file.name, e));
                return None;
            }
        };

        let decoded = if decoded.width() > MAX_PREVIEW_SIZE || decoded.height() > MAX_PREVIEW_SIZE {
            decoded.thumbnail(MAX_PREVIEW_SIZE, MAX_PREVIEW_SIZE)
        } else {
            decoded
        };

        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

        Some(self.ctx.load_texture(
            format!("preview-{}", id),
            color_image,
            egui::TextureOptions::LINEAR,
        ))
    }
}

impl PreviewRegistry for PreviewRegistryTexture {
    fn acquire(
        &self,
        file: &ImageFile,
    ) -> Result<PreviewHandle, Box<dyn std::error::Error + Send + Sync>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let texture = self.decode(id, file);

        self.textures
            .lock()
            .map_err(|e| e.to_string())?
            .insert(id, texture);

        self.logger
            .info(&format!("Acquired preview {} for {}", id, file.name))?;

        Ok(PreviewHandle::new(id))
    }

    fn release(&self, handle: PreviewHandle) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let removed = self
            .textures
            .lock()
            .map_err(|e| e.to_string())?
            .remove(&handle.id());

        match removed {
            Some(_) => {
                self.logger
                    .info(&format!("Released preview {}", handle.id()))?;
                Ok(())
            }
            None => Err(format!("Unknown preview handle {}", handle.id()).into()),
        }
    }
}
