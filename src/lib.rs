pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod math;
pub mod renderer;
pub mod types;
pub mod window;

pub use camera::{Camera, CameraController, CameraSettings, CameraSnapshot, UpVectorMode};
pub use config::ViewerConfig;
