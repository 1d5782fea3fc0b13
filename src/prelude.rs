pub use crate::actor::Actor;
pub use crate::animation::{Animation, AnimationSet, PlayMode, SheetDesc};
pub use crate::assets::{AssetEvent, AssetStore};
pub use crate::color::*;
pub use crate::errors::Error;
pub use crate::handle::Handle;
pub use crate::motion::{Motion, MotionFlags};
pub use crate::render::{DrawCall, Render};
pub use crate::shake::Shaker;
pub use crate::sprite::Sprite;
pub use crate::stage::{ActorId, Stage};
pub use crate::types::{Anchor, Rect};
pub use anyhow::{self, Result};
pub use glam;
pub use glam::Vec2;
