use std::{
    hash::Hash,
    sync::{mpsc::Sender, Arc},
};

pub type HandleId = u64;

/// Reference counted handle of an engine-owned texture.
/// Dropping the last clone queues a release event so the engine side
/// can free the texture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(Arc<HandleInner>);

impl Handle {
    pub(crate) fn new(id: HandleId, release: Sender<ReleaseEvent>) -> Self {
        Self(Arc::new(HandleInner { id, release }))
    }

    pub fn id(&self) -> HandleId {
        self.0.id
    }
}

#[derive(Debug)]
pub(crate) struct ReleaseEvent(pub HandleId);

#[derive(Debug)]
struct HandleInner {
    id: HandleId,
    release: Sender<ReleaseEvent>,
}

impl Hash for HandleInner {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(&self.id, state)
    }
}

impl Eq for HandleInner {}

impl PartialEq for HandleInner {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for HandleInner {
    fn drop(&mut self) {
        // receiver may already be gone on shutdown
        let _ = self.release.send(ReleaseEvent(self.id));
    }
}
