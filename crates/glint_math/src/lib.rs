//! Glint math - vectors, rays, intervals and random sampling.
//!
//! `Vec3` is glam's f32 vector. `Point3` and `Color` are aliases so that
//! signatures say what a triple means without adding a conversion layer.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;
pub mod sampling;

pub use interval::Interval;
pub use ray::Ray;

/// A location in world space.
pub type Point3 = Vec3;

/// Linear RGB color, channels nominally in [0, 1].
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_unit_vector_has_length_one() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert_eq!(v.length(), 13.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_normalizes_to_non_finite() {
        // Callers must not normalize zero vectors; the result is NaN, not a panic.
        let n = Vec3::ZERO.normalize();
        assert!(!n.is_finite());
    }
}
