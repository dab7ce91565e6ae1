use crate::camera::CameraSnapshot;

/// Per-frame uniform buffer data for the ray-tracing fragment program.
///
/// Field order and padding mirror `Uniforms` in `shaders/raytrace.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewerUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad0: f32,
    pub camera_location: [f32; 3],
    pub _pad1: f32,
    pub camera_lookat: [f32; 3], // World-space point, not a direction
    pub _pad2: f32,
    pub camera_vup: [f32; 3],
    pub _pad3: f32,
}

impl ViewerUniforms {
    pub fn new(camera: &CameraSnapshot, resolution: (u32, u32), time: f32) -> Self {
        Self {
            resolution: [resolution.0 as f32, resolution.1 as f32],
            time,
            _pad0: 0.0,
            camera_location: camera.location.to_array(),
            _pad1: 0.0,
            camera_lookat: camera.look_at.to_array(),
            _pad2: 0.0,
            camera_vup: camera.vup.to_array(),
            _pad3: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_uniform_size_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<ViewerUniforms>(), 64);
        assert_eq!(std::mem::offset_of!(ViewerUniforms, camera_location), 16);
        assert_eq!(std::mem::offset_of!(ViewerUniforms, camera_lookat), 32);
        assert_eq!(std::mem::offset_of!(ViewerUniforms, camera_vup), 48);
    }

    #[test]
    fn test_uniforms_from_snapshot() {
        let snapshot = CameraSnapshot {
            location: Vec3::new(1.0, 2.0, 3.0),
            look_at: Vec3::new(1.0, 2.0, 2.0),
            vup: Vec3::Y,
        };
        let uniforms = ViewerUniforms::new(&snapshot, (800, 600), 1.5);

        assert_eq!(uniforms.resolution, [800.0, 600.0]);
        assert_eq!(uniforms.time, 1.5);
        assert_eq!(uniforms.camera_location, [1.0, 2.0, 3.0]);
        assert_eq!(uniforms.camera_lookat, [1.0, 2.0, 2.0]);
        assert_eq!(uniforms.camera_vup, [0.0, 1.0, 0.0]);
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 64);
    }
}
