use glam::Vec3;

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

#[inline]
pub fn scale(v: Vec3, k: f32) -> Vec3 {
    Vec3::new(v.x * k, v.y * k, v.z * k)
}

/// Right-handed cross product. `cross(a, b) == -cross(b, a)`.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Divides each component by the vector length.
///
/// The input must not be zero length: a zero vector yields NaN components.
/// Camera code never passes one, so there is no branch here.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let length = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    Vec3::new(v.x / length, v.y / length, v.z / length)
}

/// Un-normalized "right" axis for a forward direction and an up reference.
#[inline]
pub fn right_of(forward: Vec3, up: Vec3) -> Vec3 {
    cross(forward, up)
}
