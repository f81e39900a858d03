//! Conversion from scene descriptions to renderable geometry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Dielectric, HittableList, Lambertian, Material, Metal, Sphere};
use glint_core::{MaterialDescription, SceneDescription, SceneError};

/// Instantiate a material from its description.
pub fn build_material(desc: &MaterialDescription) -> Arc<dyn Material> {
    match *desc {
        MaterialDescription::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDescription::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)),
        MaterialDescription::Dielectric { refraction_index } => {
            Arc::new(Dielectric::new(refraction_index))
        }
    }
}

/// Validate a scene description and build its world.
///
/// Each named material is instantiated once and shared by every sphere
/// that references it.
pub fn build_world(scene: &SceneDescription) -> Result<HittableList, SceneError> {
    scene.validate()?;

    let materials: HashMap<&str, Arc<dyn Material>> = scene
        .materials
        .iter()
        .map(|(name, desc)| (name.as_str(), build_material(desc)))
        .collect();

    let mut world = HittableList::new();
    for (index, sphere) in scene.spheres.iter().enumerate() {
        let material = materials
            .get(sphere.material.as_str())
            .ok_or_else(|| SceneError::UnknownMaterial {
                index,
                name: sphere.material.clone(),
            })?;
        world.add(Box::new(Sphere::new(sphere.center, sphere.radius, Arc::clone(material))));
    }

    log::info!(
        "Built world: {} spheres sharing {} materials",
        world.len(),
        materials.len()
    );

    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ray_color, Color, Hittable, Interval, Ray, Vec3};
    use glint_core::{random_scene, CameraDescription};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_world_from_description() {
        let mut scene = SceneDescription::new(CameraDescription::default());
        scene.add_material("red", MaterialDescription::Lambertian { albedo: Color::X });
        scene.add_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, "red");
        scene.add_sphere(Vec3::new(3.0, 0.0, -5.0), 1.0, "red");

        let world = build_world(&scene).unwrap();
        assert_eq!(world.len(), 2);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_description_is_rejected() {
        let mut scene = SceneDescription::new(CameraDescription::default());
        scene.add_sphere(Vec3::ZERO, 1.0, "missing");

        assert!(matches!(
            build_world(&scene),
            Err(SceneError::UnknownMaterial { index: 0, .. })
        ));
    }

    #[test]
    fn test_shared_material_is_built_once() {
        let mut scene = SceneDescription::new(CameraDescription::default());
        scene.add_material("glass", MaterialDescription::Dielectric { refraction_index: 1.5 });
        for i in 0..3 {
            scene.add_sphere(Vec3::new(i as f32 * 3.0, 0.0, -5.0), 1.0, "glass");
        }

        let world = build_world(&scene).unwrap();
        let forward = Vec3::new(0.0, 0.0, -1.0);
        let a = world.hit(&Ray::new(Vec3::ZERO, forward), Interval::UNIVERSE);
        let b = world.hit(&Ray::new(Vec3::new(3.0, 0.0, 0.0), forward), Interval::UNIVERSE);

        let (a, b) = (a.unwrap(), b.unwrap());
        assert!(std::ptr::eq(
            a.material as *const _ as *const (),
            b.material as *const _ as *const ()
        ));
    }

    #[test]
    fn test_random_scene_renders() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut rng = StdRng::seed_from_u64(2024);
        let scene = random_scene(&mut rng);
        let world = build_world(&scene).unwrap();

        // Looking straight down from above the ground always hits geometry
        let ray = Ray::new(Vec3::new(0.0, 50.0, 0.3), -Vec3::Y);
        let color = ray_color(&ray, &world, 8, &mut rng);
        assert!(color.is_finite());
        assert!(color.cmpge(Color::ZERO).all());
    }
}
