//! Asset polling and redraw scheduling.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::HeroApp;
use super::types::POLL_INTERVAL;

impl HeroApp {
    /// Drain decoded assets, then schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_assets();

        if self.animation.is_running() {
            self.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
        } else if self.asset_rx.is_some() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }

    fn poll_assets(&mut self) {
        loop {
            let Some(rx) = self.asset_rx.as_ref() else {
                return;
            };
            match rx.try_recv() {
                Ok(event) => self.handle_asset_event(event),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    tracing::debug!("Asset loader finished");
                    self.asset_rx = None;
                    return;
                }
            }
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
