//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use hero_scene::{input, Clock};

use super::core::HeroApp;

impl ApplicationHandler for HeroApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.should_exit = true;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.handle_resized(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(ref mut ctx) = self.ctx {
                    input::handle_mouse_move(ctx, position.x, position.y);
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.press_enter();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl HeroApp {
    /// Enter and Space act as the enter button.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if state != ElementState::Pressed || repeat {
            return;
        }
        if matches!(logical_key, Key::Named(NamedKey::Enter | NamedKey::Space)) {
            self.press_enter();
        }
    }

    fn press_enter(&mut self) {
        let Some(ref mut ctx) = self.ctx else {
            return;
        };
        if !input::handle_click(ctx, self.clock.now()) {
            tracing::debug!("Enter ignored: button already used or absent");
        }
    }

    fn handle_resized(&mut self, width: u32, height: u32) {
        let Some(ref mut ctx) = self.ctx else {
            return;
        };
        if !input::handle_resize(ctx, width, height) {
            return;
        }
        if let Some(ref mut rs) = self.render_state {
            rs.resize(width, height);
        }
        tracing::debug!(width, height, "Viewport resized");
        self.request_redraw();
    }
}
