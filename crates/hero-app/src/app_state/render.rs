//! Per-frame tick and FPS reporting.

use std::time::Instant;

use hero_scene::{Clock, TickOutcome};

use super::core::HeroApp;

impl HeroApp {
    /// Run one animation tick against the GPU renderer.
    pub(super) fn render_frame(&mut self) {
        let (Some(ctx), Some(rs)) = (self.ctx.as_mut(), self.render_state.as_mut()) else {
            return;
        };

        let outcome = self.animation.tick(ctx, rs, self.clock.now());
        if outcome != TickOutcome::Rendered {
            return;
        }

        let now = Instant::now();
        self.frame_timer.begin_frame_at(now);
        if self.config.logging.log_fps && self.frame_timer.report_due(now) {
            tracing::debug!(
                fps = format_args!("{:.1}", self.frame_timer.fps()),
                frame_ms = format_args!("{:.2}", self.frame_timer.frame_time_ms()),
                frames = self.animation.frames(),
                "Frame rate"
            );
        }
    }
}
