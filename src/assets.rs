use std::{
    fs, mem,
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver, Sender},
};

use glam::UVec2;
use hashbrown::HashMap;

use crate::{
    errors::Error,
    handle::{Handle, HandleId, ReleaseEvent},
};

/// Texture lifecycle events the host engine drains each frame
#[derive(Debug)]
pub enum AssetEvent {
    /// A decoded RGBA8 texture waiting for upload
    UploadTexture {
        handle: Handle,
        data: Vec<u8>,
        size: UVec2,
    },
    /// All handle clones are gone, the engine can free the texture
    ReleaseTexture { handle: HandleId },
}

/// AssetStore
/// Façade over the engine's texture loader. Decoding is a pass-through
/// to the `image` crate; the store keeps a name-to-handle cross
/// reference so game code can look textures up by bare file stem.
pub struct AssetStore {
    root: PathBuf,
    next_id: HandleId,
    names: HashMap<String, Handle>,
    sizes: HashMap<HandleId, UVec2>,
    pending: Vec<AssetEvent>,
    sender: Sender<ReleaseEvent>,
    receiver: Receiver<ReleaseEvent>,
}

impl AssetStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let (sender, receiver) = channel();
        Self {
            root: root.as_ref().to_owned(),
            next_id: 0,
            names: Default::default(),
            sizes: Default::default(),
            pending: Vec::default(),
            sender,
            receiver,
        }
    }

    fn alloc_handle(&mut self) -> Handle {
        let id = self.next_id;
        self.next_id += 1;
        Handle::new(id, self.sender.clone())
    }

    /// Load and decode a texture under the store root. The file stem is
    /// registered as an alias, so `load_texture("ship.png")` makes the
    /// texture reachable as `"ship"`.
    pub fn load_texture<P: AsRef<Path>>(&mut self, path: P) -> Result<Handle, Error> {
        let path = path.as_ref();
        let full = self.root.join(path);
        let bytes = fs::read(&full)?;
        let im = match image::ImageFormat::from_path(&full) {
            Ok(format) => image::load_from_memory_with_format(&bytes, format),
            _ => image::load_from_memory(&bytes),
        }?;
        let size = UVec2::new(im.width(), im.height());
        let data = im.into_rgba8().into_raw();

        let handle = self.alloc_handle();
        self.sizes.insert(handle.id(), size);
        self.pending.push(AssetEvent::UploadTexture {
            handle: handle.clone(),
            data,
            size,
        });
        if self.pending.len() > 4096 {
            log::warn!("Too many pending uploads");
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            self.names.insert(stem.to_string(), handle.clone());
        }
        Ok(handle)
    }

    /// Register an extra name for a handle
    pub fn alias(&mut self, name: impl Into<String>, handle: Handle) {
        self.names.insert(name.into(), handle);
    }

    pub fn get(&self, name: &str) -> Option<&Handle> {
        self.names.get(name)
    }

    /// Look a texture up by name, logging a diagnostic line on a miss
    pub fn texture(&self, name: &str) -> Option<Handle> {
        let handle = self.names.get(name).cloned();
        if handle.is_none() {
            log::error!("no texture named {name:?}");
        }
        handle
    }

    pub fn texture_size(&self, handle: &Handle) -> Option<UVec2> {
        self.sizes.get(&handle.id()).copied()
    }

    /// Drop the store's own reference to a named texture. The engine is
    /// told to free it once the remaining clones are gone.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name).is_some()
    }

    /// Drain pending upload and release events for the engine to apply
    pub fn take_pending(&mut self) -> Vec<AssetEvent> {
        while let Ok(event) = self.receiver.try_recv() {
            self.sizes.remove(&event.0);
            self.pending.push(AssetEvent::ReleaseTexture { handle: event.0 });
        }
        mem::take(&mut self.pending)
    }
}
