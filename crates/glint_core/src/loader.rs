//! Reading and writing scene files.
//!
//! Scenes are stored as JSON. Loading always validates, so a scene that
//! comes back from [`load_scene`] is safe to hand to the renderer.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

impl SceneDescription {
    /// Parse and validate a scene from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a scene file from disk.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/three_spheres.json")?;
/// ```
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let scene = SceneDescription::from_json_str(&json)?;

    log::info!(
        "Loaded scene {}: {} spheres, {} materials",
        path.display(),
        scene.sphere_count(),
        scene.material_count()
    );

    Ok(scene)
}

/// Write a scene file to disk.
pub fn save_scene(scene: &SceneDescription, path: impl AsRef<Path>) -> SceneResult<()> {
    let path = path.as_ref();
    fs::write(path, scene.to_json_string()?)?;
    log::info!("Wrote scene to {}", path.display());
    Ok(())
}
