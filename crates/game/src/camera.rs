//! Third-person follow camera.

use engine_core::Vec3;

/// Rigid follow camera: position and target are pure functions of the avatar,
/// recomputed every frame. Only the placement offsets survive a frame
/// boundary. No smoothing - fast avatar turns snap the camera with them.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Distance behind the avatar along its facing axis.
    pub follow_distance: f32,
    /// Fixed camera height, substituted for the vertical component.
    pub height: f32,
    position: Vec3,
    target: Vec3,
}

impl FollowCamera {
    pub fn new(follow_distance: f32, height: f32) -> Self {
        Self {
            follow_distance,
            height,
            position: Vec3::new(0.0, height, -follow_distance),
            target: Vec3::ZERO,
        }
    }

    /// Re-aim at the avatar for this frame.
    pub fn follow(&mut self, avatar_position: Vec3, facing: Vec3) {
        let mut position = avatar_position - facing * self.follow_distance;
        position.y = self.height;
        self.position = position;
        self.target = avatar_position;
    }

    /// Camera position for the renderer collaborator.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target for the renderer collaborator.
    pub fn target(&self) -> Vec3 {
        self.target
    }
}
