//! The "final render" demo scene: a field of small random spheres around
//! three large feature spheres.

use glint_math::sampling::{gen_f32, gen_range, random_vec3, random_vec3_range};
use glint_math::{Color, Vec3};
use rand::RngCore;

use crate::scene::{CameraDescription, MaterialDescription, SceneDescription};

/// Small spheres are laid on an (a, b) grid over [-GRID_EXTENT, GRID_EXTENT).
const GRID_EXTENT: i32 = 11;
const SMALL_RADIUS: f32 = 0.2;

/// Generate the demo scene from the given random source.
///
/// The same seed always yields the same scene.
pub fn random_scene(rng: &mut dyn RngCore) -> SceneDescription {
    let mut scene = SceneDescription::new(CameraDescription {
        look_from: Vec3::new(13.0, 2.0, 3.0),
        look_at: Vec3::ZERO,
        vup: Vec3::Y,
        vfov: 20.0,
        aperture: 0.1,
        focus_dist: 10.0,
    });

    scene.add_material(
        "ground",
        MaterialDescription::Lambertian {
            albedo: Color::splat(0.5),
        },
    );
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, "ground");

    // All glass shares a single material
    scene.add_material(
        "glass",
        MaterialDescription::Dielectric {
            refraction_index: 1.5,
        },
    );

    // Keep clear of the metal feature sphere
    let keep_clear = Vec3::new(4.0, SMALL_RADIUS, 0.0);

    for a in -GRID_EXTENT..GRID_EXTENT {
        for b in -GRID_EXTENT..GRID_EXTENT {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                SMALL_RADIUS,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            let name = if choose_mat < 0.8 {
                let name = format!("diffuse_{a}_{b}");
                let albedo = random_vec3(rng) * random_vec3(rng);
                scene.add_material(name.clone(), MaterialDescription::Lambertian { albedo });
                name
            } else if choose_mat < 0.95 {
                let name = format!("metal_{a}_{b}");
                let albedo = random_vec3_range(rng, 0.5, 1.0);
                let fuzz = gen_range(rng, 0.0, 0.5);
                scene.add_material(name.clone(), MaterialDescription::Metal { albedo, fuzz });
                name
            } else {
                "glass".to_string()
            };

            scene.add_sphere(center, SMALL_RADIUS, name);
        }
    }

    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, "glass");

    scene.add_material(
        "brown",
        MaterialDescription::Lambertian {
            albedo: Color::new(0.4, 0.2, 0.1),
        },
    );
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, "brown");

    scene.add_material(
        "mirror",
        MaterialDescription::Metal {
            albedo: Color::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        },
    );
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, "mirror");

    log::info!(
        "Generated random scene: {} spheres, {} materials",
        scene.sphere_count(),
        scene.material_count()
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_scene_is_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let scene = random_scene(&mut rng);

        assert!(scene.validate().is_ok());

        // Ground + at most 22x22 small spheres + 3 feature spheres
        let max_spheres = 1 + (2 * GRID_EXTENT as usize).pow(2) + 3;
        assert!(scene.sphere_count() > 4);
        assert!(scene.sphere_count() <= max_spheres);
    }

    #[test]
    fn test_random_scene_is_deterministic_per_seed() {
        let a = random_scene(&mut StdRng::seed_from_u64(7));
        let b = random_scene(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_spheres_avoid_feature_sphere() {
        let scene = random_scene(&mut StdRng::seed_from_u64(3));
        let keep_clear = Vec3::new(4.0, SMALL_RADIUS, 0.0);

        for sphere in scene.spheres.iter().filter(|s| s.radius == SMALL_RADIUS) {
            assert!((sphere.center - keep_clear).length() > 0.9);
            assert_eq!(sphere.center.y, SMALL_RADIUS);
        }
    }

    #[test]
    fn test_feature_spheres_present() {
        let scene = random_scene(&mut StdRng::seed_from_u64(11));
        let last: Vec<_> = scene.spheres.iter().rev().take(3).collect();

        assert_eq!(last[0].material, "mirror");
        assert_eq!(last[1].material, "brown");
        assert_eq!(last[2].material, "glass");
        assert_eq!(scene.camera.look_from, Vec3::new(13.0, 2.0, 3.0));
    }
}
