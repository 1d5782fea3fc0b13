pub mod actor;
pub mod animation;
pub mod assets;
pub mod color;
pub mod errors;
pub mod handle;
pub mod motion;
pub mod prelude;
pub mod render;
pub mod sat;
pub mod shake;
pub mod sprite;
pub mod stage;
pub mod types;
pub mod util;
