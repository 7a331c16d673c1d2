use crate::image_file::interface::ImageFile;
use crate::preview::interface::{PreviewHandle, PreviewRegistry};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Tracks which handles are live so tests can detect leaks and double releases.
#[derive(Default)]
pub struct PreviewRegistryFake {
    next_id: AtomicU64,
    live: Mutex<BTreeSet<u64>>,
    released: Mutex<Vec<u64>>,
}

impl PreviewRegistryFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> Vec<u64> {
        self.live
            .lock()
            .map(|live| live.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn released(&self) -> Vec<u64> {
        self.released.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl PreviewRegistry for PreviewRegistryFake {
    fn acquire(
        &self,
        _file: &ImageFile,
    ) -> Result<PreviewHandle, Box<dyn std::error::Error + Send + Sync>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.live.lock().map_err(|e| e.to_string())?.insert(id);
        Ok(PreviewHandle::new(id))
    }

    fn release(&self, handle: PreviewHandle) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let was_live = self
            .live
            .lock()
            .map_err(|e| e.to_string())?
            .remove(&handle.id());
        if !was_live {
            return Err(format!("Unknown preview handle {}", handle.id()).into());
        }
        self.released
            .lock()
            .map_err(|e| e.to_string())?
            .push(handle.id());
        Ok(())
    }
}
