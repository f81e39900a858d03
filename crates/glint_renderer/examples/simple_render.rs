//! Simple ray tracer example.
//!
//! Renders three spheres on a ground plane and saves to PPM format.
//!
//! Run with: cargo run --release -p glint_renderer --example simple_render

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use glint_renderer::{
    color_to_rgb8, render, Camera, Color, Dielectric, HittableList, ImageBuffer, Lambertian,
    Material, Metal, RenderConfig, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let world = build_scene();

    let config = RenderConfig {
        image_width: 400,
        aspect_ratio: 16.0 / 9.0,
        samples_per_pixel: 50,
        max_depth: 10,
    };

    let look_from = Vec3::new(3.0, 3.0, 2.0);
    let look_at = Vec3::new(0.0, 0.0, -1.0);
    let camera = Camera::new(
        look_from,
        look_at,
        Vec3::Y,
        20.0,
        config.aspect_ratio,
        0.2,
        (look_from - look_at).length(),
    );

    let mut rng = StdRng::seed_from_u64(42);
    let image = render(&camera, &world, &config, &mut rng).expect("Invalid render config");

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> HittableList {
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let gold: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center)));
    world.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass)));
    world.add(Box::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, gold)));

    world
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb8(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}
