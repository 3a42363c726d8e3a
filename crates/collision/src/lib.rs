//! Static-world collision for Glade.
//!
//! The world is a flat bounded plane with optional solid boxes on it. There
//! is no rigid-body simulation here: moving entities get a clipped
//! displacement, and overlap queries answer contact questions. That is the
//! whole contract.

pub mod aabb;
pub mod world;

pub use aabb::*;
pub use world::*;
