//! Glade - run, jump, dance, and scoop up orbs on a flat field.
//!
//! The binary hosts the simulation: a winit event loop drives one simulation
//! step per redraw and feeds keyboard events into the input snapshot. No
//! renderer is attached - the window exists to source input and pace frames;
//! progress shows up on the log.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use engine_core::Time;
use game::assets::CharacterRig;
use game::config::GameConfig;
use game::events::GameEvent;
use game::GameState;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Application handler for winit.
struct App {
    window: Option<Arc<Window>>,
    state: GameState,
    time: Time,
}

impl App {
    fn new(state: GameState) -> Self {
        Self {
            window: None,
            state,
            time: Time::new(),
        }
    }

    /// One simulation frame: tick the clock, step the state, report events.
    fn frame(&mut self) {
        let dt = self.time.tick();
        self.state.update(dt);

        let remaining = self.state.live_pickups();
        for event in self.state.events.drain(..) {
            match event {
                GameEvent::PickupCollected { position } => {
                    log::info!(
                        "pickup collected at ({:.1}, {:.1}) - {} left",
                        position.x,
                        position.z,
                        remaining
                    );
                }
                GameEvent::FieldCleared => log::info!("field cleared!"),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title("Glade")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.state.config.window_width,
                    self.state.config.window_height,
                ));
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    let window = Arc::new(window);
                    window.request_redraw();
                    self.window = Some(window);
                }
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => {
                self.frame();
                if !self.state.running {
                    event_loop.exit();
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                if self.state.handle_window_event(other) {
                    event_loop.exit();
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Glade");
    println!("  W/S or Up/Down     - walk forward / backward");
    println!("  A/D or Left/Right  - turn");
    println!("  Shift              - run");
    println!("  Space              - jump");
    println!("  B                  - dance");
    println!("  Escape             - quit");

    let config = GameConfig::load();
    let mut state = GameState::new(config);

    // Character loading is the one fallible startup step. On failure the
    // session keeps running in its no-avatar mode.
    let rig_path = state.config.rig_path.clone();
    match CharacterRig::load(Path::new(&rig_path)) {
        Ok(rig) => state.attach_avatar(rig),
        Err(e) => log::warn!("character load failed, running without an avatar: {}", e),
    }

    let event_loop = EventLoop::new()?;
    // Poll continuously: Wait would block until events arrive and stall the
    // redraw-driven simulation step.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(state);
    event_loop.run_app(&mut app)?;

    Ok(())
}
