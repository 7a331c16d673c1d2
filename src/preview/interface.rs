use crate::image_file::interface::ImageFile;

/// A renderable reference to a selected file. Not `Clone`: the only way to
/// give it up is `PreviewRegistry::release`, so it is released at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewHandle(u64);

impl PreviewHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait PreviewRegistry: Send + Sync {
    fn acquire(
        &self,
        file: &ImageFile,
    ) -> Result<PreviewHandle, Box<dyn std::error::Error + Send + Sync>>;

    fn release(&self, handle: PreviewHandle) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
