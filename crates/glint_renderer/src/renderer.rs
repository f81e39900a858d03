//! Core ray tracing renderer.
//!
//! Implements Monte Carlo ray tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction

use std::time::Instant;

use crate::{Camera, Color, Hittable, Ray};
use glint_math::sampling::gen_f32;
use glint_math::Interval;
use rand::RngCore;
use thiserror::Error;

/// Rays start this far along their direction to avoid re-hitting the
/// surface they just left ("shadow acne").
const T_MIN: f32 = 0.001;

/// Errors from render setup.
#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub image_width: u32,
    /// Image width / height; the height is derived from it
    pub aspect_ratio: f32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

impl RenderConfig {
    /// Image height in pixels, never less than one.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.image_width == 0 {
            return Err(RenderError::InvalidConfig("image width must be positive".into()));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "aspect ratio {} must be positive",
                self.aspect_ratio
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig("samples per pixel must be positive".into()));
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidConfig("max depth must be positive".into()));
        }
        // Pixel indices are u32, so the whole image must be addressable
        if self.image_width.checked_mul(self.image_height()).is_none() {
            return Err(RenderError::InvalidConfig(format!(
                "{}x{} image exceeds {} pixels",
                self.image_width,
                self.image_height(),
                u32::MAX
            )));
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// Each bounce multiplies in the material's attenuation. The recursion
/// ends on a miss (sky), on absorption (black) or when `depth` reaches
/// zero (black).
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        None => Color::ZERO,
    }
}

/// Compute sky gradient background: white looking down, blue looking up.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a gamma-corrected color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);
    let r = (256.0 * intensity.clamp(color.x)) as u8;
    let g = (256.0 * intensity.clamp(color.y)) as u8;
    let b = (256.0 * intensity.clamp(color.z)) as u8;
    [r, g, b]
}

/// Render a single pixel with multi-sampling.
///
/// `(x, y)` are image coordinates with `y = 0` the top row. Returns the
/// linear (not gamma-corrected) average of all samples.
///
/// `x` must be below the image width and `y` below the image height.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.image_width;
    let height = config.image_height();
    debug_assert!(x < width && y < height, "pixel ({x}, {y}) outside {width}x{height}");

    // Viewport t grows upwards, image rows grow downwards
    let row = (height - 1 - y) as f32;
    let u_scale = (width.max(2) - 1) as f32;
    let v_scale = (height.max(2) - 1) as f32;

    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (x as f32 + gen_f32(rng)) / u_scale;
        let v = (row + gen_f32(rng)) / v_scale;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Simple image buffer for storing render output.
///
/// Pixels are row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer of gamma-corrected colors.
///
/// Single-threaded; pixels are evaluated in row-major order so a seeded
/// `rng` always produces the same image.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    let width = config.image_width;
    let height = config.image_height();
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    for y in 0..height {
        log::debug!("Scanlines remaining: {}", height - y);
        for x in 0..width {
            let color = render_pixel(camera, world, x, y, config, rng);
            let corrected = Color::new(
                linear_to_gamma(color.x),
                linear_to_gamma(color.y),
                linear_to_gamma(color.z),
            );
            image.set(x, y, corrected);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}
