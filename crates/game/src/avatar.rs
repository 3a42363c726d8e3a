//! Avatar controller: locomotion state machine and vertical motion.

use collision::{Aabb, StaticWorld};
use engine_core::{Transform, Vec3};
use input::InputState;

use crate::assets::CharacterRig;

/// Height above the ground plane at or below which a falling avatar counts as
/// landed. A proxy for a real contact query; see `StaticWorld::height_above_ground`.
const GROUND_CONTACT_THRESHOLD: f32 = 0.05;

/// Movement/animation category selected fresh every frame.
///
/// Consumed by the animation collaborator; never stored on the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionMode {
    Idle,
    WalkForward,
    WalkBackward,
    RunForward,
    Dance,
}

/// The single player-controlled entity.
///
/// Position marks the feet; the collision box extends upward from it.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub transform: Transform,
    pub vertical_velocity: f32,
    pub grounded: bool,
    rig: CharacterRig,
}

impl Avatar {
    /// Create an avatar at the given feet position. It starts airborne and
    /// settles onto the ground on the first frame.
    pub fn new(rig: CharacterRig, position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            vertical_velocity: 0.0,
            grounded: false,
            rig,
        }
    }

    /// Movement tuning this avatar was loaded with.
    pub fn rig(&self) -> &CharacterRig {
        &self.rig
    }

    /// Horizontal facing direction.
    pub fn facing(&self) -> Vec3 {
        self.transform.forward()
    }

    /// Collision box at the current position.
    pub fn bounds(&self) -> Aabb {
        let half = Vec3::from(self.rig.half_extents);
        Aabb::from_center_half_extents(self.transform.position + Vec3::Y * half.y, half)
    }

    /// Run the locomotion state machine for one frame.
    ///
    /// Priority order: dance is modal and suppresses rotation and translation
    /// entirely; otherwise turning applies first, then translation along the
    /// facing axis, clipped by the static world. The jump request is checked
    /// last regardless of the selected mode, so jumping composes with
    /// horizontal movement.
    pub fn control(&mut self, input: &InputState, world: &StaticWorld, dt: f32) -> LocomotionMode {
        let mode = if input.dance_held() {
            LocomotionMode::Dance
        } else {
            // Fixed step per held frame, not scaled by dt (see CharacterRig::rotation_step).
            if input.turn_left_held() {
                self.transform.rotate_y(-self.rig.rotation_step);
            }
            if input.turn_right_held() {
                self.transform.rotate_y(self.rig.rotation_step);
            }

            let (mode, speed) = if input.backward_held() && !input.forward_held() {
                (LocomotionMode::WalkBackward, -self.rig.backward_speed)
            } else if input.forward_held() {
                if input.sprint_held() {
                    (LocomotionMode::RunForward, self.rig.run_speed)
                } else {
                    (LocomotionMode::WalkForward, self.rig.walk_speed)
                }
            } else {
                (LocomotionMode::Idle, 0.0)
            };

            if speed != 0.0 {
                let step = self.facing() * speed * dt;
                let resolved = world.move_with_collision(self.bounds(), step);
                self.transform.translate(resolved);
            }
            mode
        };

        // Held key plus the grounded flag, no edge detection: airborne frames
        // cannot re-trigger, landing with the key still down jumps again.
        if input.jump_held() && self.grounded {
            self.vertical_velocity = self.rig.jump_impulse;
            self.grounded = false;
        }

        mode
    }

    /// Apply gravity and vertical displacement for one frame.
    ///
    /// The jump impulse is set by [`Avatar::control`]; this pass only ever
    /// pulls the avatar down or zeroes its velocity on landing.
    pub fn integrate_vertical(&mut self, world: &StaticWorld, dt: f32) {
        if !self.grounded {
            self.vertical_velocity -= self.rig.gravity * dt;
        }
        let step = Vec3::new(0.0, self.vertical_velocity * dt, 0.0);
        let resolved = world.move_with_collision(self.bounds(), step);
        self.transform.translate(resolved);

        if self.vertical_velocity <= 0.0
            && world.height_above_ground(self.transform.position) <= GROUND_CONTACT_THRESHOLD
        {
            self.transform.position.y = world.ground_y();
            self.vertical_velocity = 0.0;
            self.grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::Action;

    const DT: f32 = 1.0 / 60.0;

    fn world() -> StaticWorld {
        StaticWorld::new(25.0)
    }

    fn grounded_avatar() -> Avatar {
        let mut avatar = Avatar::new(CharacterRig::default(), Vec3::ZERO);
        avatar.integrate_vertical(&world(), DT);
        assert!(avatar.grounded);
        avatar
    }

    fn input_with(actions: &[Action]) -> InputState {
        let mut input = InputState::new();
        for &action in actions {
            input.set_action(action, true);
        }
        input
    }

    /// Dance suppresses rotation and translation no matter what else is held.
    #[test]
    fn dance_is_modal_and_exclusive() {
        let mut avatar = grounded_avatar();
        let before = avatar.transform;
        let input = input_with(&[
            Action::Dance,
            Action::Forward,
            Action::TurnLeft,
            Action::TurnRight,
            Action::Sprint,
        ]);
        let mode = avatar.control(&input, &world(), DT);
        assert_eq!(mode, LocomotionMode::Dance);
        assert_eq!(avatar.transform, before);
    }

    /// Forward alone walks; adding sprint runs, at the respective speeds.
    #[test]
    fn forward_selects_walk_or_run() {
        let world = world();
        let mut avatar = grounded_avatar();
        let mode = avatar.control(&input_with(&[Action::Forward]), &world, DT);
        assert_eq!(mode, LocomotionMode::WalkForward);
        let walked = avatar.transform.position.length();
        assert!((walked - avatar.rig().walk_speed * DT).abs() < 1e-5);

        let mut avatar = grounded_avatar();
        let mode = avatar.control(&input_with(&[Action::Forward, Action::Sprint]), &world, DT);
        assert_eq!(mode, LocomotionMode::RunForward);
        let ran = avatar.transform.position.length();
        assert!((ran - avatar.rig().run_speed * DT).abs() < 1e-5);
    }

    /// Backward alone walks backward, against the facing axis.
    #[test]
    fn backward_walks_backward() {
        let world = world();
        let mut avatar = grounded_avatar();
        let facing = avatar.facing();
        let mode = avatar.control(&input_with(&[Action::Backward]), &world, DT);
        assert_eq!(mode, LocomotionMode::WalkBackward);
        assert!(avatar.transform.position.dot(facing) < 0.0);
    }

    /// With both movement keys held, forward wins.
    #[test]
    fn forward_beats_backward() {
        let mut avatar = grounded_avatar();
        let mode = avatar.control(&input_with(&[Action::Forward, Action::Backward]), &world(), DT);
        assert_ne!(mode, LocomotionMode::WalkBackward);
        assert_eq!(mode, LocomotionMode::WalkForward);
    }

    /// No movement keys means Idle and zero translation.
    #[test]
    fn no_keys_is_idle() {
        let mut avatar = grounded_avatar();
        let mode = avatar.control(&InputState::new(), &world(), DT);
        assert_eq!(mode, LocomotionMode::Idle);
        assert_eq!(avatar.transform.position, Vec3::ZERO);
    }

    /// Both turn keys may apply in the same frame and cancel out.
    #[test]
    fn turn_keys_are_not_mutually_exclusive() {
        let world = world();
        let mut avatar = grounded_avatar();
        let facing = avatar.facing();
        avatar.control(&input_with(&[Action::TurnLeft, Action::TurnRight]), &world, DT);
        assert!(avatar.facing().abs_diff_eq(facing, 1e-6));

        avatar.control(&input_with(&[Action::TurnRight]), &world, DT);
        assert!(!avatar.facing().abs_diff_eq(facing, 1e-6));
    }

    /// Jump fires only while grounded, exactly once, and cannot re-trigger
    /// while the key stays held in the air.
    #[test]
    fn jump_requires_ground_contact() {
        let world = world();
        let mut avatar = grounded_avatar();
        let input = input_with(&[Action::Jump]);

        avatar.control(&input, &world, DT);
        assert!(!avatar.grounded);
        assert_eq!(avatar.vertical_velocity, avatar.rig().jump_impulse);

        // Airborne with the key still held: velocity is untouched by control.
        avatar.integrate_vertical(&world, DT);
        let airborne_velocity = avatar.vertical_velocity;
        avatar.control(&input, &world, DT);
        assert_eq!(avatar.vertical_velocity, airborne_velocity);
    }

    /// Jump composes with horizontal movement in the same frame.
    #[test]
    fn jump_composes_with_walking() {
        let world = world();
        let mut avatar = grounded_avatar();
        let mode = avatar.control(&input_with(&[Action::Forward, Action::Jump]), &world, DT);
        assert_eq!(mode, LocomotionMode::WalkForward);
        assert!(!avatar.grounded);
        assert!(avatar.transform.position.length() > 0.0);
    }

    /// Airborne vertical velocity strictly decreases frame over frame.
    #[test]
    fn gravity_is_monotonic() {
        let world = world();
        let mut avatar = Avatar::new(CharacterRig::default(), Vec3::new(0.0, 20.0, 0.0));
        let mut last = avatar.vertical_velocity;
        for _ in 0..10 {
            avatar.integrate_vertical(&world, DT);
            assert!(avatar.vertical_velocity < last);
            last = avatar.vertical_velocity;
        }
    }

    /// Landing sets grounded and resets vertical velocity to exactly zero.
    #[test]
    fn landing_zeroes_velocity() {
        let world = world();
        let mut avatar = Avatar::new(CharacterRig::default(), Vec3::new(0.0, 2.0, 0.0));
        for _ in 0..600 {
            avatar.integrate_vertical(&world, DT);
            if avatar.grounded {
                break;
            }
        }
        assert!(avatar.grounded);
        assert_eq!(avatar.vertical_velocity, 0.0);
        assert_eq!(avatar.transform.position.y, world.ground_y());
    }

    /// A full jump arc returns to the ground and ends grounded.
    #[test]
    fn jump_arc_lands() {
        let world = world();
        let mut avatar = grounded_avatar();
        let mut input = input_with(&[Action::Jump]);
        avatar.control(&input, &world, DT);
        input.set_action(Action::Jump, false);

        let mut peak: f32 = 0.0;
        for _ in 0..600 {
            avatar.control(&input, &world, DT);
            avatar.integrate_vertical(&world, DT);
            peak = peak.max(avatar.transform.position.y);
            if avatar.grounded {
                break;
            }
        }
        assert!(avatar.grounded);
        assert!(peak > 1.0, "jump should gain height, peaked at {peak}");
        assert_eq!(avatar.transform.position.y, world.ground_y());
    }

    /// Walking into the field boundary is clipped, not penetrating.
    #[test]
    fn translation_is_clipped_at_the_boundary() {
        let world = world();
        let rig = CharacterRig::default();
        let half_x = rig.half_extents[0];
        // Facing -Z by default; start close to the -Z edge.
        let mut avatar = Avatar::new(rig, Vec3::new(0.0, 0.0, -24.0));
        avatar.integrate_vertical(&world, DT);
        let input = input_with(&[Action::Forward, Action::Sprint]);
        for _ in 0..120 {
            avatar.control(&input, &world, DT);
        }
        assert!(avatar.transform.position.z >= -world.half_extent() + half_x - 1e-4);
    }
}
