//! Scene components.
//!
//! This crate provides the spatial building blocks:
//! - Transforms with local and world space operations
//! - A perspective camera with a cached projection matrix
//! - Input-driven camera controllers

pub mod camera;
pub mod controller;
pub mod space;
pub mod transform;

pub use camera::{Camera, CameraSettings};
pub use controller::SphericalController;
pub use space::Space;
pub use transform::{Transform, WORLD_UP, quat_from_euler_degrees};
