//! Glade simulation core.
//!
//! One avatar walks, runs, jumps, and dances over a flat bounded field while
//! a rigid third-person camera follows it and a scatter of collectible orbs
//! despawns on contact. Everything here runs synchronously inside a single
//! host-driven frame callback; rendering, audio, and device polling are
//! external collaborators.

pub mod animation;
pub mod assets;
pub mod avatar;
pub mod camera;
pub mod config;
pub mod events;
pub mod pickups;
pub mod state;

pub use state::GameState;
