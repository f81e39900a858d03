//! Thin-lens camera for ray generation.

use crate::{Point3, Ray, Vec3};
use glint_core::CameraDescription;
use glint_math::sampling::random_in_unit_disk;
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Immutable once built. Rays leave from a disk of radius `aperture / 2`
/// around `origin` and pass through the viewport placed at the focus
/// distance, so geometry on that plane is sharp and everything else blurs.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    // Orthonormal frame: u right, v up, w backwards (away from look_at)
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a camera.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect_ratio`: viewport width / height
    /// - `aperture`: lens diameter, 0.0 = pinhole (no defocus blur)
    /// - `focus_dist`: distance to the plane of perfect focus
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        vup: Vec3,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        // Calculate viewport dimensions
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    /// Create a camera from a scene description.
    pub fn from_description(desc: &CameraDescription, aspect_ratio: f32) -> Self {
        Self::new(
            desc.look_from,
            desc.look_at,
            desc.vup,
            desc.vfov,
            aspect_ratio,
            desc.aperture,
            desc.focus_dist,
        )
    }

    /// Generate a ray through normalized viewport coordinates.
    ///
    /// `(s, t) = (0, 0)` is the lower-left corner of the viewport and
    /// `(1, 1)` the upper-right.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        let origin = self.origin + offset;
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;

        Ray::new(origin, target - origin)
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    /// Unit vector pointing from the camera towards `look_at`.
    pub fn forward(&self) -> Vec3 {
        -self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pinhole(focus_dist: f32) -> Camera {
        Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
            0.0,
            focus_dist,
        )
    }

    #[test]
    fn test_camera_basis() {
        let camera = pinhole(1.0);

        assert_eq!(camera.origin(), Vec3::ZERO);
        assert!((camera.w - Vec3::Z).length() < 1e-6);
        assert!((camera.u - Vec3::X).length() < 1e-6);
        assert!((camera.v - Vec3::Y).length() < 1e-6);
        assert!((camera.forward() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_center_ray_points_straight_ahead() {
        let mut rng = StdRng::seed_from_u64(42);

        for focus_dist in [0.5, 1.0, 10.0] {
            let camera = pinhole(focus_dist);
            let ray = camera.get_ray(0.5, 0.5, &mut rng);

            assert_eq!(ray.origin(), Vec3::ZERO);
            let forward = Vec3::new(0.0, 0.0, -1.0);
            assert!((ray.direction().normalize() - forward).length() < 1e-5);
        }
    }

    #[test]
    fn test_corner_rays_span_field_of_view() {
        let camera = pinhole(1.0);
        let mut rng = StdRng::seed_from_u64(1);

        // 90 degree vfov with aspect 1: corners sit at (+-1, +-1, -1)
        let lower_left = camera.get_ray(0.0, 0.0, &mut rng);
        let upper_right = camera.get_ray(1.0, 1.0, &mut rng);

        assert!((lower_left.direction() - Vec3::new(-1.0, -1.0, -1.0)).length() < 1e-5);
        assert!((upper_right.direction() - Vec3::new(1.0, 1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_defocus_rays_converge_on_focus_plane() {
        let focus_dist = 4.0;
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            40.0,
            1.5,
            0.5,
            focus_dist,
        );
        assert_eq!(camera.lens_radius(), 0.25);

        let mut rng = StdRng::seed_from_u64(7);
        let reference = camera.get_ray(0.3, 0.6, &mut rng);
        let focus_point = reference.at(1.0);

        for _ in 0..50 {
            let ray = camera.get_ray(0.3, 0.6, &mut rng);

            // Origins stay on the lens disk
            let offset = ray.origin() - camera.origin();
            assert!(offset.length() <= camera.lens_radius() + 1e-6);
            assert!(offset.dot(camera.forward()).abs() < 1e-5);

            // Every ray reaches the same point on the focus plane at t = 1
            assert!((ray.at(1.0) - focus_point).length() < 1e-4);
        }
    }

    #[test]
    fn test_from_description() {
        let desc = CameraDescription::default();
        let camera = Camera::from_description(&desc, 2.0);
        let mut rng = StdRng::seed_from_u64(3);

        let ray = camera.get_ray(1.0, 0.5, &mut rng);
        // Half-width at aspect 2 and 90 degree vfov is 2
        assert!((ray.direction() - Vec3::new(2.0, 0.0, -1.0)).length() < 1e-5);
    }
}
