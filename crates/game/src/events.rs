//! Observable simulation events.
//!
//! The core keeps no score and draws no UI; these are the hooks a scoring or
//! HUD layer would attach to. The host drains the queue once per frame.

use engine_core::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An orb was touched by the avatar and permanently removed.
    PickupCollected { position: Vec3 },
    /// The last orb was collected.
    FieldCleared,
}
