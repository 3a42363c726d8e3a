//! Top-level game state and the per-frame step.

use collision::StaticWorld;
use engine_core::{Vec3, World};
use input::InputState;
use winit::event::WindowEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::animation::Animator;
use crate::assets::CharacterRig;
use crate::avatar::Avatar;
use crate::camera::FollowCamera;
use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::pickups;

/// Everything a session owns: the entity world, collision geometry, input
/// snapshot, camera, and - once character loading has completed - the avatar.
pub struct GameState {
    pub config: GameConfig,
    pub world: World,
    pub statics: StaticWorld,
    pub input: InputState,
    pub camera: FollowCamera,
    pub avatar: Option<Avatar>,
    pub animator: Option<Animator>,
    /// Events produced this frame, drained by the host.
    pub events: Vec<GameEvent>,
    pub running: bool,
}

impl GameState {
    /// Build the world: flat field, scattered orbs, camera. The avatar is
    /// absent until [`GameState::attach_avatar`].
    pub fn new(config: GameConfig) -> Self {
        let statics = StaticWorld::new(config.field_half_extent);
        let mut world = World::new();
        let mut rng = rand::thread_rng();
        pickups::scatter(
            &mut world,
            &mut rng,
            config.pickup_count,
            config.field_half_extent,
        );
        log::info!(
            "field ready: {} pickups over a {}x{} square",
            config.pickup_count,
            config.field_half_extent * 2.0,
            config.field_half_extent * 2.0
        );
        let camera = FollowCamera::new(config.camera_distance, config.camera_height);
        Self {
            config,
            world,
            statics,
            input: InputState::new(),
            camera,
            avatar: None,
            animator: None,
            events: Vec::new(),
            running: true,
        }
    }

    /// Called by the host once character loading completes.
    pub fn attach_avatar(&mut self, rig: CharacterRig) {
        self.animator = Some(Animator::new(&rig.animations));
        self.avatar = Some(Avatar::new(rig, Vec3::ZERO));
        log::info!("avatar ready");
    }

    /// Advance the simulation by one frame.
    ///
    /// Fixed order: locomotion, vertical integration, camera follow, pickup
    /// sweep. With no avatar attached every stage is a safe no-op.
    pub fn update(&mut self, dt: f32) {
        let Some(avatar) = self.avatar.as_mut() else {
            return;
        };

        let mode = avatar.control(&self.input, &self.statics, dt);
        avatar.integrate_vertical(&self.statics, dt);
        self.camera.follow(avatar.transform.position, avatar.facing());

        if let Some(animator) = self.animator.as_mut() {
            if animator.apply(mode) {
                log::debug!("locomotion mode: {:?}", mode);
            }
        }

        let bounds = avatar.bounds();
        let collected = pickups::sweep(&mut self.world, &bounds, &mut self.events);
        if collected > 0 && pickups::live_count(&self.world) == 0 {
            self.events.push(GameEvent::FieldCleared);
        }
    }

    /// Orbs still in the field.
    pub fn live_pickups(&self) -> usize {
        pickups::live_count(&self.world)
    }

    /// Handle a window event. Returns true if the app should exit.
    pub fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.running = false;
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state);
                    if key == KeyCode::Escape && event.state.is_pressed() {
                        self.running = false;
                        return true;
                    }
                }
                false
            }
            _ => false,
        }
    }
}
