//! Scene description loading.

mod scene;

pub use scene::{ArmConfig, SceneConfig, SceneError};
