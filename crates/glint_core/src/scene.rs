//! Scene description types for Glint.
//!
//! A description is plain data: spheres, named materials and a camera. It
//! can be written by hand as JSON, generated procedurally, and validated
//! before the renderer turns it into intersectable geometry.

use std::collections::BTreeMap;

use glint_math::{Color, Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};

/// Surface response of a material, keyed by name in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Ideal diffuse surface
    Lambertian { albedo: Color },

    /// Specular reflector, `fuzz` in [0, 1] perturbs the mirror direction
    Metal { albedo: Color, fuzz: f32 },

    /// Clear refractive material such as glass (1.5) or water (1.33)
    Dielectric { refraction_index: f32 },
}

impl MaterialDescription {
    fn validate(&self, name: &str) -> SceneResult<()> {
        let invalid = |reason: String| SceneError::InvalidMaterial {
            name: name.to_string(),
            reason,
        };

        match *self {
            MaterialDescription::Lambertian { albedo } => {
                if !albedo.is_finite() {
                    return Err(invalid(format!("albedo {albedo} is not finite")));
                }
            }
            MaterialDescription::Metal { albedo, fuzz } => {
                if !albedo.is_finite() {
                    return Err(invalid(format!("albedo {albedo} is not finite")));
                }
                if !(0.0..=1.0).contains(&fuzz) {
                    return Err(invalid(format!("fuzz {fuzz} is outside [0, 1]")));
                }
            }
            MaterialDescription::Dielectric { refraction_index } => {
                if !(refraction_index.is_finite() && refraction_index > 0.0) {
                    return Err(invalid(format!(
                        "refraction index {refraction_index} must be positive"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A sphere referencing a material by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Point3,
    pub radius: f32,
    pub material: String,
}

impl SphereDescription {
    pub fn new(center: Point3, radius: f32, material: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

/// Camera placement and lens.
///
/// The aspect ratio is not part of the scene; it comes from the render
/// configuration so the same scene can be rendered at any image shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub look_from: Point3,
    pub look_at: Point3,
    #[serde(default = "default_vup")]
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Lens diameter, 0 for a pinhole camera
    #[serde(default)]
    pub aperture: f32,
    /// Distance from the camera to the plane of perfect focus
    #[serde(default = "default_focus_dist")]
    pub focus_dist: f32,
}

fn default_vup() -> Vec3 {
    Vec3::Y
}

fn default_focus_dist() -> f32 {
    1.0
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

impl CameraDescription {
    fn validate(&self) -> SceneResult<()> {
        let invalid = |reason: String| Err(SceneError::InvalidCamera(reason));

        if !(self.look_from.is_finite() && self.look_at.is_finite() && self.vup.is_finite()) {
            return invalid("camera vectors must be finite".to_string());
        }
        if (self.look_from - self.look_at).length_squared() == 0.0 {
            return invalid("look_from and look_at coincide".to_string());
        }
        if self.vup.cross(self.look_from - self.look_at).length_squared() == 0.0 {
            return invalid("vup is parallel to the view direction".to_string());
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return invalid(format!("vfov {} is outside (0, 180)", self.vfov));
        }
        if !(self.aperture.is_finite() && self.aperture >= 0.0) {
            return invalid(format!("aperture {} must be non-negative", self.aperture));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return invalid(format!("focus_dist {} must be positive", self.focus_dist));
        }

        Ok(())
    }
}

/// A complete scene: camera, named materials and spheres.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,

    /// Materials shared between spheres, keyed by name
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// Create an empty scene viewed by the given camera.
    pub fn new(camera: CameraDescription) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    /// Register a material under `name`, replacing any previous one.
    pub fn add_material(&mut self, name: impl Into<String>, material: MaterialDescription) {
        self.materials.insert(name.into(), material);
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, center: Point3, radius: f32, material: impl Into<String>) {
        self.spheres.push(SphereDescription::new(center, radius, material));
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> Option<&MaterialDescription> {
        self.materials.get(name)
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Check every invariant the renderer relies on.
    ///
    /// Returns the first violation found: camera first, then materials in
    /// name order, then spheres in declaration order.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;

        for (name, material) in &self.materials {
            material.validate(name)?;
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("center {} is not finite", sphere.center),
                });
            }
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("radius {} must be positive", sphere.radius),
                });
            }
            if !self.materials.contains_key(&sphere.material) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: sphere.material.clone(),
                });
            }
        }

        let unused = self
            .materials
            .keys()
            .filter(|name| !self.spheres.iter().any(|s| &s.material == *name))
            .count();
        if unused > 0 {
            log::warn!("Scene declares {} unused materials", unused);
        }

        Ok(())
    }
}
