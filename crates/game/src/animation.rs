//! Animation-group selection driven by the locomotion state machine.
//!
//! The groups themselves belong to the rendering collaborator; what lives
//! here is the playback bookkeeping: which named group is active, whether it
//! loops, and at what speed. Running reuses the walk cycle sped up, as the
//! character asset ships no separate run clip.

use crate::assets::AnimationNames;
use crate::avatar::LocomotionMode;

/// Playback rate of the walk cycle while running.
const RUN_PLAYBACK_SPEED: f32 = 1.5;

/// Handle onto one named animation group of the loaded character.
#[derive(Debug, Clone)]
pub struct AnimationGroup {
    name: String,
    playing: bool,
    looping: bool,
    speed: f32,
}

impl AnimationGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            playing: false,
            looping: false,
            speed: 1.0,
        }
    }

    /// Start (or restart) playback.
    pub fn play(&mut self, looping: bool, speed: f32) {
        self.playing = true;
        self.looping = looping;
        self.speed = speed;
        log::debug!("animation '{}' playing (speed {speed})", self.name);
    }

    /// Halt playback.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

/// Maps each frame's locomotion mode onto exactly one playing group.
#[derive(Debug, Clone)]
pub struct Animator {
    idle: AnimationGroup,
    walk: AnimationGroup,
    walk_back: AnimationGroup,
    dance: AnimationGroup,
    current: LocomotionMode,
}

impl Animator {
    /// Build the group handles from the rig's animation names and start in
    /// the idle loop.
    pub fn new(names: &AnimationNames) -> Self {
        let mut idle = AnimationGroup::new(&names.idle);
        idle.play(true, 1.0);
        Self {
            idle,
            walk: AnimationGroup::new(&names.walk),
            walk_back: AnimationGroup::new(&names.walk_back),
            dance: AnimationGroup::new(&names.dance),
            current: LocomotionMode::Idle,
        }
    }

    /// Switch playback to match this frame's mode. Returns true when the
    /// mode changed; a repeated mode never restarts the group.
    pub fn apply(&mut self, mode: LocomotionMode) -> bool {
        if mode == self.current {
            return false;
        }
        self.group_mut(self.current).stop();
        let speed = match mode {
            LocomotionMode::RunForward => RUN_PLAYBACK_SPEED,
            _ => 1.0,
        };
        self.group_mut(mode).play(true, speed);
        self.current = mode;
        true
    }

    /// Mode whose group is currently playing.
    pub fn current_mode(&self) -> LocomotionMode {
        self.current
    }

    /// The group selected for the current mode.
    pub fn playing_group(&self) -> &AnimationGroup {
        self.group(self.current)
    }

    fn group(&self, mode: LocomotionMode) -> &AnimationGroup {
        match mode {
            LocomotionMode::Idle => &self.idle,
            LocomotionMode::WalkForward | LocomotionMode::RunForward => &self.walk,
            LocomotionMode::WalkBackward => &self.walk_back,
            LocomotionMode::Dance => &self.dance,
        }
    }

    fn group_mut(&mut self, mode: LocomotionMode) -> &mut AnimationGroup {
        match mode {
            LocomotionMode::Idle => &mut self.idle,
            LocomotionMode::WalkForward | LocomotionMode::RunForward => &mut self.walk,
            LocomotionMode::WalkBackward => &mut self.walk_back,
            LocomotionMode::Dance => &mut self.dance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> Animator {
        Animator::new(&AnimationNames::default())
    }

    /// A fresh animator idles in a loop.
    #[test]
    fn starts_in_idle() {
        let a = animator();
        assert_eq!(a.current_mode(), LocomotionMode::Idle);
        assert!(a.playing_group().is_playing());
        assert_eq!(a.playing_group().name(), "Idle");
    }

    /// A mode change stops the old group and starts the new one.
    #[test]
    fn mode_change_swaps_groups() {
        let mut a = animator();
        assert!(a.apply(LocomotionMode::WalkForward));
        assert_eq!(a.playing_group().name(), "Walk");
        assert!(a.playing_group().is_playing());
        assert!(!a.group(LocomotionMode::Idle).is_playing());
    }

    /// Repeating the same mode does not restart the group.
    #[test]
    fn repeated_mode_is_a_noop() {
        let mut a = animator();
        assert!(a.apply(LocomotionMode::Dance));
        assert!(!a.apply(LocomotionMode::Dance));
        assert_eq!(a.playing_group().name(), "Samba");
    }

    /// Running reuses the walk clip at the faster playback rate.
    #[test]
    fn run_reuses_walk_clip_sped_up() {
        let mut a = animator();
        a.apply(LocomotionMode::WalkForward);
        assert_eq!(a.playing_group().speed(), 1.0);
        assert!(a.apply(LocomotionMode::RunForward));
        assert_eq!(a.playing_group().name(), "Walk");
        assert_eq!(a.playing_group().speed(), RUN_PLAYBACK_SPEED);
    }
}
