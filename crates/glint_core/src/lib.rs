//! Glint Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene types**: `SceneDescription`, `SphereDescription`,
//!   `MaterialDescription`, `CameraDescription`
//! - **Loading**: JSON scene files via serde
//! - **Demo scene**: the classic "many random spheres" layout
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} materials",
//!     scene.sphere_count(),
//!     scene.material_count());
//! ```

pub mod loader;
pub mod random_scene;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, save_scene, SceneError, SceneResult};
pub use random_scene::random_scene;
pub use scene::{CameraDescription, MaterialDescription, SceneDescription, SphereDescription};
