//! Random sampling helpers.
//!
//! Every function takes the random source explicitly so that callers own
//! their generator: a seeded `StdRng` makes a render reproducible, and each
//! logical thread of execution can carry an independent stream.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Upper bound on draws for the rejection samplers below.
///
/// A uniform source accepts a unit-ball candidate with probability ~0.52,
/// so this cap is unreachable in practice. It only matters for a degenerate
/// source (e.g. a constant generator), where the sampler returns a fixed
/// fallback instead of spinning forever.
pub const MAX_REJECTION_ATTEMPTS: usize = 1024;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Vector with each component uniform in [0, 1).
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}

/// Vector with each component uniform in [min, max).
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range(rng, min, max),
        gen_range(rng, min, max),
        gen_range(rng, min, max),
    )
}

/// Uniform point strictly inside the unit ball.
///
/// Rejection sampling: draw from the enclosing cube until the candidate's
/// squared length is below 1. Falls back to the origin after
/// [`MAX_REJECTION_ATTEMPTS`] rejections.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3::ZERO
}

/// Uniformly distributed direction of length one.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = random_in_unit_sphere(rng);
        // Reject points too close to the center to normalize reliably
        if p.length_squared() > 1e-12 {
            return p.normalize();
        }
    }
    Vec3::Z
}

/// Uniform point inside the unit disk in the xy plane (z = 0).
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3::new(gen_range(rng, -1.0, 1.0), gen_range(rng, -1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3::ZERO
}

/// Diffuse bounce direction: a point in the unit ball placed on the tip of
/// `normal`. Biased towards the normal, roughly cosine-weighted.
pub fn random_diffuse_direction(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    normal + random_in_unit_sphere(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));

            let y = gen_range(&mut rng, -3.0, 2.0);
            assert!((-3.0..2.0).contains(&y));
        }
    }

    #[test]
    fn test_random_vec3_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let v = random_vec3(&mut rng);
            assert!(v.cmpge(Vec3::ZERO).all() && v.cmplt(Vec3::ONE).all());

            let w = random_vec3_range(&mut rng, 0.5, 1.0);
            assert!(w.cmpge(Vec3::splat(0.5)).all() && w.cmplt(Vec3::ONE).all());
        }
    }

    #[test]
    fn test_unit_sphere_samples_inside() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_unit_vector_length() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5, "length was {}", v.length());
        }
    }

    #[test]
    fn test_unit_disk_samples_flat_and_inside() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let p = random_in_unit_disk(&mut rng);
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_diffuse_direction_within_unit_of_normal_tip() {
        let mut rng = StdRng::seed_from_u64(6);
        let normal = Vec3::Y;
        for _ in 0..1000 {
            let d = random_diffuse_direction(normal, &mut rng);
            assert!((d - normal).length() < 1.0);
        }
    }

    #[test]
    fn test_degenerate_source_terminates() {
        // Every draw is just under 1.0, so every cube sample is a corner
        // and would be rejected forever without the cap.
        let mut rng = StepRng::new(u64::MAX, 0);

        assert_eq!(random_in_unit_sphere(&mut rng), Vec3::ZERO);
        assert_eq!(random_in_unit_disk(&mut rng), Vec3::ZERO);
        assert_eq!(random_unit_vector(&mut rng), Vec3::Z);
    }
}
