use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{CameraSettings, UpVectorMode, CAMERA_MOVE_SPEED, CAMERA_ROTATE_SPEED};
use crate::cli::Cli;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Viewer settings. Defaults < config file < command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub move_speed: f32,
    pub rotate_speed: f32,
    pub up_mode: UpVectorMode,
    pub grab_cursor: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "Ray Tracer".to_string(),
            move_speed: CAMERA_MOVE_SPEED,
            rotate_speed: CAMERA_ROTATE_SPEED,
            up_mode: UpVectorMode::Fixed,
            grab_cursor: true,
        }
    }
}

impl ViewerConfig {
    /// Resolve the final configuration from the command line
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(title) = &cli.title {
            self.title = title.clone();
        }
        if let Some(speed) = cli.move_speed {
            self.move_speed = speed;
        }
        if let Some(speed) = cli.rotate_speed {
            self.rotate_speed = speed;
        }
        if cli.orthonormal_up {
            self.up_mode = UpVectorMode::Orthonormal;
        }
        if cli.no_grab_cursor {
            self.grab_cursor = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("Window size must be non-zero, got {}x{}", self.width, self.height);
        }
        for (name, value) in [("move_speed", self.move_speed), ("rotate_speed", self.rotate_speed)] {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a finite non-negative number, got {}", name, value);
            }
        }
        Ok(())
    }

    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            move_speed: self.move_speed,
            rotate_speed: self.rotate_speed,
            up_mode: self.up_mode,
        }
    }

    /// Initial pointer position: the centre of the initial window
    pub fn pointer_origin(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}
