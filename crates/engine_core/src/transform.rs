//! Transform component for spatial positioning.

use glam::{Quat, Vec3};

/// Position and rotation of an entity in world space.
///
/// Gameplay entities in Glade only ever rotate about the world Y axis, so the
/// rotation is best thought of as a yaw angle stored as a quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a transform at the given position, facing the default direction.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with an initial yaw in radians.
    pub fn from_position_yaw(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw),
        }
    }

    /// Get the forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Rotate around the world Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle) * self.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default facing is -Z; a half-turn yaw flips it to +Z.
    #[test]
    fn forward_follows_yaw() {
        let mut t = Transform::default();
        assert!(t.forward().abs_diff_eq(-Vec3::Z, 1e-6));
        t.rotate_y(std::f32::consts::PI);
        assert!(t.forward().abs_diff_eq(Vec3::Z, 1e-5));
    }

    /// A quarter turn left brings the old forward onto the right axis.
    #[test]
    fn right_is_perpendicular_to_forward() {
        let t = Transform::from_position_yaw(Vec3::ZERO, std::f32::consts::FRAC_PI_2);
        assert!(t.forward().abs_diff_eq(-Vec3::X, 1e-6));
        assert!(t.right().abs_diff_eq(-Vec3::Z, 1e-6));
    }

    /// Translation accumulates in world space regardless of rotation.
    #[test]
    fn translate_accumulates() {
        let mut t = Transform::from_position_yaw(Vec3::new(1.0, 0.0, 0.0), 1.0);
        t.translate(Vec3::new(0.0, 2.0, -3.0));
        t.translate(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(t.position, Vec3::new(2.0, 2.0, -3.0));
    }
}
