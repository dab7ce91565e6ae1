use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{Button, Controller};
use crate::math::{add, cross, normalize, right_of, scale, sub};

pub const CAMERA_MOVE_SPEED: f32 = 0.02;
pub const CAMERA_ROTATE_SPEED: f32 = 0.005;

/// Eye position and orientation.
///
/// `look_direction` is a unit vector, not a target point. `up` is a fixed
/// reference and is never re-orthogonalized against `look_direction`, so the
/// two drift out of perpendicular as yaw and pitch mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub look_direction: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_direction: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// World-space point handed to the renderer in place of the direction
    pub fn world_look_at(&self) -> Vec3 {
        add(self.position, self.look_direction)
    }
}

/// Which up vector is published to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpVectorMode {
    /// Publish the fixed reference up as-is
    #[default]
    Fixed,
    /// Publish an up vector rebuilt perpendicular to the look direction.
    /// The stored reference up is left untouched.
    Orthonormal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Position step per frame for each held movement key
    pub move_speed: f32,
    /// Look-direction step per pixel of pointer motion
    pub rotate_speed: f32,
    pub up_mode: UpVectorMode,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: CAMERA_MOVE_SPEED,
            rotate_speed: CAMERA_ROTATE_SPEED,
            up_mode: UpVectorMode::Fixed,
        }
    }
}

/// The three vectors the ray-tracing program consumes each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    pub location: Vec3,
    /// World-space target point, `location + look_direction`
    pub look_at: Vec3,
    pub vup: Vec3,
}

/// Last observed cursor position, only used to derive deltas
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerState {
    x: f64,
    y: f64,
}

/// Owns the camera and applies pointer and keyboard input to it.
///
/// Two entry points with different cadences: [`rotate`](Self::rotate) runs on
/// every pointer notification, [`translate`](Self::translate) runs once per
/// frame. Neither is scaled by frame time.
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: Camera,
    pointer: PointerState,
    settings: CameraSettings,
}

impl CameraController {
    /// Create a controller at the initial pose with the pointer at `pointer_origin`
    pub fn new(settings: CameraSettings, pointer_origin: (f64, f64)) -> Self {
        Self {
            camera: Camera::default(),
            pointer: PointerState {
                x: pointer_origin.0,
                y: pointer_origin.1,
            },
            settings,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn pointer(&self) -> (f64, f64) {
        (self.pointer.x, self.pointer.y)
    }

    /// Mouse look from an absolute cursor position (origin top-left).
    ///
    /// Screen Y grows downward, so moving the cursor up pitches up.
    pub fn rotate(&mut self, x: f64, y: f64) {
        let delta_x = x - self.pointer.x;
        let delta_y = self.pointer.y - y;
        self.pointer = PointerState { x, y };

        let speed = f64::from(self.settings.rotate_speed);
        self.apply_rotation((delta_x * speed) as f32, (delta_y * speed) as f32);
    }

    /// Mouse look from a pointer delta, Y already pointing up
    pub fn rotate_by(&mut self, delta_x: f32, delta_y: f32) {
        let speed = self.settings.rotate_speed;
        self.apply_rotation(delta_x * speed, delta_y * speed);
    }

    // Yaw first, then pitch on the yaw-adjusted direction.
    fn apply_rotation(&mut self, yaw_amount: f32, pitch_amount: f32) {
        let up = self.camera.up;
        let look = yaw(self.camera.look_direction, up, yaw_amount);
        self.camera.look_direction = pitch(look, up, pitch_amount);
    }

    /// Apply one frame of movement for every held key.
    ///
    /// Keys are applied in order forward, backward, left, right and the
    /// results are summed without renormalization.
    pub fn translate(&mut self, controller: &dyn Controller) {
        let step = self.settings.move_speed;
        let look = self.camera.look_direction;
        let mut position = self.camera.position;

        for button in Button::MOVEMENT {
            if !controller.is_down(button) {
                continue;
            }
            position = match button {
                Button::Forward => add(position, scale(look, step)),
                Button::Backward => sub(position, scale(look, step)),
                Button::Left => sub(position, scale(self.strafe_axis(), step)),
                Button::Right => add(position, scale(self.strafe_axis(), step)),
                Button::Exit => position,
            };
        }

        self.camera.position = position;
    }

    fn strafe_axis(&self) -> Vec3 {
        normalize(right_of(self.camera.look_direction, self.camera.up))
    }

    /// Camera state for this frame's uniforms; look-at is recomputed on every call
    pub fn publish(&self) -> CameraSnapshot {
        CameraSnapshot {
            location: self.camera.position,
            look_at: self.camera.world_look_at(),
            vup: self.published_up(),
        }
    }

    fn published_up(&self) -> Vec3 {
        let Camera {
            look_direction, up, ..
        } = self.camera;

        match self.settings.up_mode {
            UpVectorMode::Fixed => up,
            UpVectorMode::Orthonormal => {
                let right = right_of(look_direction, up);
                // Looking straight along `up` leaves no plane to rebuild from
                if right.length_squared() < 1e-12 {
                    return up;
                }
                normalize(cross(normalize(right), look_direction))
            }
        }
    }
}

fn yaw(look: Vec3, up: Vec3, amount: f32) -> Vec3 {
    normalize(add(look, scale(right_of(look, up), amount)))
}

fn pitch(look: Vec3, up: Vec3, amount: f32) -> Vec3 {
    normalize(add(look, scale(up, amount)))
}
