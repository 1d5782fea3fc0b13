use glam::UVec2;
use hashbrown::HashMap;
use serde::Deserialize;

use crate::{errors::Error, handle::Handle, sprite::Sprite};

/// How a frame sequence maps elapsed time past its end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    #[default]
    Loop,
    Once,
    PingPong,
}

/// Animation
/// An ordered sequence of sheet tile indices with a fixed per-frame
/// duration.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<u32>,
    frame_duration: f32,
    mode: PlayMode,
}

impl Animation {
    pub fn new(frames: Vec<u32>, frame_duration: f32, mode: PlayMode) -> Self {
        let frames = if frames.is_empty() {
            log::warn!("animation built with no frames, substituting tile 0");
            vec![0]
        } else {
            frames
        };
        Self {
            frames,
            frame_duration: frame_duration.max(f32::EPSILON),
            mode,
        }
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Total duration of one pass over the sequence
    pub fn duration(&self) -> f32 {
        self.frame_duration * self.frames.len() as f32
    }

    /// Tile index shown at the given elapsed time
    pub fn frame_at(&self, elapsed: f32) -> u32 {
        let n = self.frames.len();
        let idx = (elapsed.max(0.0) / self.frame_duration) as usize;
        let k = match self.mode {
            PlayMode::Loop => idx % n,
            PlayMode::Once => idx.min(n - 1),
            PlayMode::PingPong => {
                if n == 1 {
                    0
                } else {
                    let period = 2 * (n - 1);
                    let m = idx % period;
                    if m < n {
                        m
                    } else {
                        period - m
                    }
                }
            }
        };
        self.frames[k]
    }

    /// Whether a Once animation has shown its last frame
    pub fn is_done(&self, elapsed: f32) -> bool {
        self.mode == PlayMode::Once && elapsed >= self.duration()
    }
}

/// Named animations sharing one clock. At most one entry is active;
/// activating an entry resets the clock.
#[derive(Debug, Default, Clone)]
pub struct AnimationSet {
    animations: HashMap<String, Animation>,
    active: Option<String>,
    elapsed: f32,
}

impl AnimationSet {
    pub fn insert(&mut self, name: impl Into<String>, anim: Animation) {
        self.animations.insert(name.into(), anim);
    }

    /// Activate an animation and restart its clock.
    /// An unknown name leaves the current state untouched.
    pub fn play(&mut self, name: &str) {
        if !self.animations.contains_key(name) {
            log::error!("no animation named {name:?}");
            return;
        }
        self.active = Some(name.to_string());
        self.elapsed = 0.0;
    }

    /// Activate an animation unless it is already the active one
    pub fn ensure_playing(&mut self, name: &str) {
        if self.active.as_deref() != Some(name) {
            self.play(name);
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn advance(&mut self, tick: f32) {
        if self.active.is_some() {
            self.elapsed += tick;
        }
    }

    /// Tile index of the active animation at the current clock
    pub fn current_frame(&self) -> Option<u32> {
        let name = self.active.as_deref()?;
        let anim = self.animations.get(name)?;
        Some(anim.frame_at(self.elapsed))
    }

    pub fn is_done(&self) -> bool {
        let Some(anim) = self.active.as_deref().and_then(|n| self.animations.get(n)) else {
            return false;
        };
        anim.is_done(self.elapsed)
    }

    /// Build a set from a JSON sheet descriptor
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        let desc = SheetDesc::from_json(bytes)?;
        Ok(Self::from_desc(&desc))
    }

    pub fn from_desc(desc: &SheetDesc) -> Self {
        let mut set = Self::default();
        for (name, clip) in &desc.animations {
            set.insert(
                name.clone(),
                Animation::new(clip.frames.clone(), clip.frame_duration, clip.mode),
            );
        }
        set
    }
}

/// Sheet descriptor, the JSON companion of a sprite sheet
#[derive(Debug, Clone, Deserialize)]
pub struct SheetDesc {
    /// tiles per sheet row
    pub columns: u32,
    /// tile size in pixels, width then height
    pub tile_size: [u32; 2],
    pub animations: HashMap<String, ClipDesc>,
}

impl SheetDesc {
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Build the sheet view this descriptor lays out
    pub fn sprite(&self, texture: Handle) -> Sprite {
        let [w, h] = self.tile_size;
        Sprite::new(texture, UVec2::new(w, h)).with_columns(self.columns)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClipDesc {
    pub frames: Vec<u32>,
    pub frame_duration: f32,
    #[serde(default)]
    pub mode: PlayMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_frames() {
        let anim = Animation::new(vec![4, 5, 6], 0.1, PlayMode::Loop);
        assert_eq!(anim.frame_at(0.0), 4);
        assert_eq!(anim.frame_at(0.15), 5);
        assert_eq!(anim.frame_at(0.25), 6);
        assert_eq!(anim.frame_at(0.35), 4);
    }

    #[test]
    fn test_once_clamps() {
        let anim = Animation::new(vec![0, 1, 2], 0.5, PlayMode::Once);
        assert_eq!(anim.frame_at(10.0), 2);
        assert!(anim.is_done(1.5));
        assert!(!anim.is_done(1.0));
    }

    #[test]
    fn test_ping_pong() {
        let anim = Animation::new(vec![0, 1, 2], 1.0, PlayMode::PingPong);
        let frames: Vec<u32> = (0..6).map(|i| anim.frame_at(i as f32 + 0.5)).collect();
        assert_eq!(frames, vec![0, 1, 2, 1, 0, 1]);
    }

    #[test]
    fn test_play_unknown_keeps_state() {
        let mut set = AnimationSet::default();
        set.insert("walk", Animation::new(vec![0, 1], 0.1, PlayMode::Loop));
        set.play("walk");
        set.advance(0.15);
        set.play("fly");
        assert_eq!(set.active(), Some("walk"));
        assert_eq!(set.current_frame(), Some(1));
    }

    #[test]
    fn test_play_restarts_clock() {
        let mut set = AnimationSet::default();
        set.insert("walk", Animation::new(vec![0, 1], 0.1, PlayMode::Loop));
        set.play("walk");
        set.advance(0.15);
        assert_eq!(set.current_frame(), Some(1));
        set.play("walk");
        assert_eq!(set.current_frame(), Some(0));
    }

    #[test]
    fn test_from_json() {
        let json = br#"{
            "columns": 8,
            "tile_size": [16, 16],
            "animations": {
                "idle": { "frames": [0, 1, 2, 1], "frame_duration": 0.2 },
                "jump": { "frames": [8, 9], "frame_duration": 0.1, "mode": "once" }
            }
        }"#;
        let set = AnimationSet::from_json(json).expect("parse sheet");
        assert!(set.get("idle").is_some());
        assert_eq!(set.get("jump").map(|a| a.mode()), Some(PlayMode::Once));
    }

    #[test]
    fn test_desc_builds_sprite() {
        let json = br#"{
            "columns": 4,
            "tile_size": [16, 24],
            "animations": {
                "idle": { "frames": [0, 1], "frame_duration": 0.2 }
            }
        }"#;
        let desc = SheetDesc::from_json(json).expect("parse sheet");

        let (sender, receiver) = std::sync::mpsc::channel();
        std::mem::forget(receiver);
        let sprite = desc.sprite(Handle::new(0, sender));
        assert_eq!(sprite.tile_size, UVec2::new(16, 24));
        assert_eq!(sprite.columns, 4);
    }
}
