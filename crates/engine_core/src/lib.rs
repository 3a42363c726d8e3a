//! Core types shared by every Glade system.
//!
//! This crate provides the foundational pieces the simulation crates build on:
//! - Spatial transform with yaw-facing helpers
//! - Frame time bookkeeping
//! - Common ECS components

pub mod components;
pub mod time;
pub mod transform;

pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec3};
pub use hecs::{Entity, World};
