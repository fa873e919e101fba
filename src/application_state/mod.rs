//! # Application State Management
//!
//! This module handles the application's state management, including:
//! - Window creation
//! - Input handling
//! - Application lifecycle events
//!
//! The window title doubles as the HUD: it shows the score, the level and the
//! game status.

pub mod input_manager;
pub mod input_state;

use std::sync::Arc;

use input_manager::InputManager;
use input_state::KeyAction;
use log::{error, info};
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowId},
};

use crate::config::GameConfig;
use crate::engine_state::EngineState;

/// The main application state container that manages the application's lifecycle.
///
/// It implements `ApplicationHandler` to handle window events and to drive the
/// gravity and key-repeat timers.
pub struct ApplicationState {
    /// Settings used to build the game once the window exists
    config: GameConfig,

    /// The initialized application state, if the application has started
    pub state: Option<InitializedApplicationState>,
}

/// Represents the fully initialized and running state of the application.
pub struct InitializedApplicationState {
    /// The game and its derived views
    pub engine_state: EngineState,

    /// Handle to the application window
    pub window: Arc<Window>,

    /// Manages held keys and their repeats
    pub input_manager: InputManager,

    /// Title last written to the window
    title: String,
}

impl ApplicationState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Creates the window and the game.
    fn initialize_application_state(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> crate::Result<InitializedApplicationState> {
        let engine_state = EngineState::new(&self.config, Instant::now())?;
        let title = engine_state.hud().title();

        #[allow(unused_mut)]
        let mut window_attrs = Window::default_attributes().with_title(title.clone());

        #[cfg(target_family = "wasm")]
        {
            use web_sys::wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let canvas = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(crate::CANVAS_ID));
            match canvas {
                Some(canvas) => window_attrs = window_attrs.with_canvas(Some(canvas.unchecked_into())),
                None => log::warn!("No element #{}, using a new canvas", crate::CANVAS_ID),
            }
        }

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        Ok(InitializedApplicationState {
            engine_state,
            window,
            input_manager: InputManager::new(self.config.key_repeat()),
            title,
        })
    }
}

impl InitializedApplicationState {
    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: KeyAction, now: Instant) {
        match action {
            KeyAction::Game(command) => {
                self.engine_state.dispatch(command);
            }
            KeyAction::Play => self.engine_state.play(now),
            KeyAction::Pause => self.engine_state.pause(now),
            KeyAction::Exit => event_loop.exit(),
        }
    }

    /// Writes the HUD to the window title when it changed.
    fn sync_title(&mut self) {
        let title = self.engine_state.hud().title();
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }
}

impl ApplicationHandler for ApplicationState {
    /// Creates the window and the game on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.initialize_application_state(event_loop) {
            Ok(state) => {
                info!("Window created, press Space to play");
                self.state = Some(state);
            }
            Err(err) => {
                error!("Failed to start: {}", err);
                event_loop.exit();
            }
        }
    }

    /// Handles window-related events such as close, focus changes, and keyboard input.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            if let WindowEvent::CloseRequested = event {
                event_loop.exit();
            }
            return;
        };

        let now = Instant::now();
        if let Some(action) = state.input_manager.intake_input(&event, now) {
            state.handle_action(event_loop, action, now);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Focused(false) => state.input_manager.reset_inputs(),
            _ => (),
        }

        state.sync_title();
    }

    /// Runs due key repeats and gravity ticks, then sleeps until the next one.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &mut self.state else {
            return;
        };

        let now = Instant::now();
        for command in state.input_manager.due_commands(now) {
            state.engine_state.dispatch(command);
        }
        state.engine_state.update(now);
        state.sync_title();

        let next = match (
            state.engine_state.next_deadline(),
            state.input_manager.next_deadline(),
        ) {
            (Some(tick), Some(repeat)) => Some(tick.min(repeat)),
            (tick, repeat) => tick.or(repeat),
        };
        event_loop.set_control_flow(match next {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        });
    }
}
