//! Glint Renderer - CPU ray tracing.
//!
//! A recursive Monte Carlo ray tracer over spheres with diffuse, metal and
//! glass materials, a thin-lens camera, and per-pixel multi-sampling.
//! Every random decision draws from a caller-supplied `RngCore`.

mod camera;
mod hittable;
mod material;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{reflect, refract, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    RenderConfig, RenderError,
};
pub use scene::{build_material, build_world};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Color, Interval, Point3, Ray, Vec3};
