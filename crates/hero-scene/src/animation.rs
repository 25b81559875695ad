//! Per-frame animation loop.
//!
//! The loop is `Idle` until the sphere texture arrives, then every tick
//! advances tweens, steps the `time` uniform, and renders, in that order.

use std::fmt;
use std::time::Duration;

use hero_common::AssetError;
use hero_config::schema::{AnimationConfig, ScenePreset, TimeMode};

use crate::context::HeroContext;
use crate::scene::Scene;
use crate::transition::Navigator;
use crate::uniforms::TextureHandle;

/// Frame pacing reference for delta mode.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// How much the `time` uniform advances per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeStep {
    /// Constant increment per frame, regardless of refresh rate.
    Fixed(f32),
    /// Scaled by elapsed wall time so that 60 fps matches `per_frame`.
    Delta { per_frame: f32 },
}

impl TimeStep {
    pub fn from_config(config: &AnimationConfig) -> Self {
        let per_frame = config.time_step as f32;
        match config.time_mode {
            TimeMode::Fixed => TimeStep::Fixed(per_frame),
            TimeMode::Delta => TimeStep::Delta { per_frame },
        }
    }

    /// Increment for a frame that took `dt`. The first frame has no `dt`.
    pub fn step(&self, dt: Option<Duration>) -> f32 {
        match *self {
            TimeStep::Fixed(step) => step,
            TimeStep::Delta { per_frame } => match dt {
                Some(dt) => per_frame * dt.as_secs_f32() * REFERENCE_FPS,
                None => per_frame,
            },
        }
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep::Fixed(0.01)
    }
}

/// Draws a scene. Implemented by the GPU renderer and by test doubles.
pub trait SceneRenderer {
    type Error: fmt::Display;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still waiting for the sphere texture; nothing was touched.
    Idle,
    Rendered,
    /// The renderer reported an error; the loop keeps running.
    RenderFailed,
}

#[derive(Debug)]
pub struct AnimationLoop {
    state: LoopState,
    time_step: TimeStep,
    last_tick: Option<Duration>,
    frames: u64,
}

impl AnimationLoop {
    /// A loop that waits for the sphere texture before rendering.
    pub fn new(time_step: TimeStep) -> Self {
        Self {
            state: LoopState::Idle,
            time_step,
            last_tick: None,
            frames: 0,
        }
    }

    /// The gradient preset needs no texture and runs immediately.
    pub fn for_preset(preset: ScenePreset, time_step: TimeStep) -> Self {
        let mut anim = Self::new(time_step);
        if preset == ScenePreset::Gradient {
            anim.start();
        }
        anim
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Ticks that reached the renderer.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            tracing::info!(time_step = ?self.time_step, "Animation loop started");
            self.state = LoopState::Running;
        }
    }

    /// Handle the result of loading the sphere texture.
    ///
    /// Success binds the texture and starts the loop. Failure is logged and
    /// the loop stays idle, so nothing is ever drawn.
    pub fn on_texture_loaded<N: Navigator>(
        &mut self,
        ctx: &mut HeroContext<N>,
        result: Result<TextureHandle, AssetError>,
    ) -> LoopState {
        match result {
            Ok(handle) => {
                if let Err(e) = ctx.scene.set_sphere_texture(handle) {
                    tracing::warn!(error = %e, "Sphere has no texture slot");
                }
                self.start();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load sphere texture");
            }
        }
        self.state
    }

    /// Run one frame.
    pub fn tick<N, R>(&mut self, ctx: &mut HeroContext<N>, renderer: &mut R, now: Duration) -> TickOutcome
    where
        N: Navigator,
        R: SceneRenderer + ?Sized,
    {
        if self.state == LoopState::Idle {
            return TickOutcome::Idle;
        }

        let dt = self.last_tick.map(|last| now.saturating_sub(last));
        self.last_tick = Some(now);

        ctx.update_tweens(now);
        ctx.scene.advance_time(self.time_step.step(dt));

        self.frames += 1;
        match renderer.render(&ctx.scene) {
            Ok(()) => TickOutcome::Rendered,
            Err(e) => {
                tracing::error!(error = %e, frame = self.frames, "Render failed");
                TickOutcome::RenderFailed
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::input::{handle_click, handle_mouse_move};
    use crate::uniforms;
    use hero_config::schema::HeroConfig;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, url: &str) {
            self.visits.push(url.to_string());
        }
    }

    /// Snapshot of what each render saw.
    #[derive(Debug, Clone, PartialEq)]
    struct Frame {
        time: f32,
        scale: f32,
        camera_z: f32,
        spotlight: Option<[f32; 2]>,
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Frame>,
        fail: bool,
    }

    impl SceneRenderer for RecordingRenderer {
        type Error = String;

        fn render(&mut self, scene: &Scene) -> Result<(), String> {
            self.frames.push(Frame {
                time: scene.time(),
                scale: scene.sphere.transform.scale[0],
                camera_z: scene.camera.position[2],
                spotlight: scene.spotlight(),
            });
            if self.fail {
                Err("surface lost".into())
            } else {
                Ok(())
            }
        }
    }

    fn context(url: &str) -> HeroContext<RecordingNavigator> {
        let mut config = HeroConfig::default();
        config.transition.target_url = url.into();
        HeroContext::from_config(&config, 800, 600, RecordingNavigator::default())
    }

    fn frame_at(i: u64) -> Duration {
        Duration::from_millis(i * 16)
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn idle_until_texture_loads() {
        let mut ctx = context("");
        let mut anim = AnimationLoop::for_preset(ScenePreset::Textured, TimeStep::default());
        let mut renderer = RecordingRenderer::default();

        for i in 0..5 {
            assert_eq!(anim.tick(&mut ctx, &mut renderer, frame_at(i)), TickOutcome::Idle);
        }
        assert!(renderer.frames.is_empty());
        assert!((ctx.scene.time() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn texture_success_starts_loop_and_binds_handle() {
        let mut ctx = context("");
        let mut anim = AnimationLoop::new(TimeStep::default());
        let state = anim.on_texture_loaded(&mut ctx, Ok(TextureHandle(7)));
        assert_eq!(state, LoopState::Running);
        assert_eq!(
            ctx.scene.sphere.material.uniforms.texture(uniforms::SPHERE_TEXTURE),
            Some(TextureHandle(7))
        );
    }

    #[test]
    fn time_after_n_ticks_is_n_steps() {
        let mut ctx = context("");
        let mut anim = AnimationLoop::new(TimeStep::default());
        let mut renderer = RecordingRenderer::default();
        anim.on_texture_loaded(&mut ctx, Ok(TextureHandle(1)));

        for i in 0..100 {
            assert_eq!(anim.tick(&mut ctx, &mut renderer, frame_at(i)), TickOutcome::Rendered);
        }
        assert!((ctx.scene.time() - 1.0).abs() < 1e-4);
        assert_eq!(renderer.frames.len(), 100);
        assert_eq!(anim.frames(), 100);
        // Time is stepped before each render.
        assert!((renderer.frames[0].time - 0.01).abs() < 1e-6);
    }

    #[test]
    fn gradient_preset_runs_without_texture() {
        let mut config = HeroConfig::default();
        config.scene.preset = ScenePreset::Gradient;
        let mut ctx = HeroContext::from_config(&config, 800, 600, RecordingNavigator::default());
        let mut anim = AnimationLoop::for_preset(ScenePreset::Gradient, TimeStep::default());
        let mut renderer = RecordingRenderer::default();

        assert!(anim.is_running());
        assert_eq!(anim.tick(&mut ctx, &mut renderer, Duration::ZERO), TickOutcome::Rendered);
    }

    #[test]
    fn texture_failure_logs_error_and_never_renders() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let mut ctx = context("");
        let mut anim = AnimationLoop::new(TimeStep::default());
        let mut renderer = RecordingRenderer::default();

        tracing::subscriber::with_default(subscriber, || {
            let err = AssetError::NotFound("textures/missing.jpg".into());
            let state = anim.on_texture_loaded(&mut ctx, Err(err));
            assert_eq!(state, LoopState::Idle);
            for i in 0..10 {
                anim.tick(&mut ctx, &mut renderer, frame_at(i));
            }
        });

        assert!(renderer.frames.is_empty());
        assert_eq!(anim.frames(), 0);
        let output = logs.contents();
        assert!(output.contains("ERROR"), "log output: {output}");
        assert!(output.contains("Failed to load sphere texture"));
        assert!(output.contains("missing.jpg"));
    }

    #[test]
    fn render_failure_keeps_loop_running() {
        let mut ctx = context("");
        let mut anim = AnimationLoop::new(TimeStep::default());
        let mut renderer = RecordingRenderer {
            fail: true,
            ..Default::default()
        };
        anim.start();

        assert_eq!(anim.tick(&mut ctx, &mut renderer, frame_at(0)), TickOutcome::RenderFailed);
        assert!(anim.is_running());
        assert_eq!(anim.tick(&mut ctx, &mut renderer, frame_at(1)), TickOutcome::RenderFailed);
        assert_eq!(renderer.frames.len(), 2);
    }

    #[test]
    fn zoom_completes_at_duration_and_navigates_once() {
        let mut ctx = context("https://example.com/portfolio");
        let mut anim = AnimationLoop::new(TimeStep::default());
        let mut renderer = RecordingRenderer::default();
        anim.on_texture_loaded(&mut ctx, Ok(TextureHandle(1)));

        let start = Duration::from_millis(500);
        anim.tick(&mut ctx, &mut renderer, start);
        assert!(handle_click(&mut ctx, start));

        anim.tick(&mut ctx, &mut renderer, start + Duration::from_millis(1000));
        let mid = renderer.frames.last().unwrap().clone();
        assert!((mid.scale - 10.5).abs() < 1e-4);
        assert!(ctx.navigator.visits.is_empty());

        anim.tick(&mut ctx, &mut renderer, start + Duration::from_millis(2000));
        let end = renderer.frames.last().unwrap().clone();
        assert!((end.scale - 20.0).abs() < 1e-5);
        assert!((end.camera_z - 12.5).abs() < 1e-5);
        assert_eq!(ctx.navigator.visits, vec!["https://example.com/portfolio".to_string()]);

        for i in 0..10 {
            anim.tick(&mut ctx, &mut renderer, start + Duration::from_millis(2100 + i * 16));
        }
        assert_eq!(ctx.navigator.visits.len(), 1);
        // Time keeps advancing after the zoom.
        assert!(ctx.scene.time() > end.time);
    }

    #[test]
    fn double_click_still_navigates_once() {
        let mut ctx = context("https://example.com/");
        let mut anim = AnimationLoop::new(TimeStep::default());
        let mut renderer = RecordingRenderer::default();
        anim.start();

        assert!(handle_click(&mut ctx, Duration::ZERO));
        assert!(!handle_click(&mut ctx, Duration::from_millis(5)));
        anim.tick(&mut ctx, &mut renderer, Duration::from_millis(3000));
        anim.tick(&mut ctx, &mut renderer, Duration::from_millis(3016));
        assert_eq!(ctx.navigator.visits.len(), 1);
    }

    #[test]
    fn spotlight_seen_by_next_render() {
        let mut ctx = context("");
        let mut anim = AnimationLoop::new(TimeStep::default());
        let mut renderer = RecordingRenderer::default();
        anim.start();

        handle_mouse_move(&mut ctx, 400.0, 150.0);
        anim.tick(&mut ctx, &mut renderer, Duration::ZERO);
        assert_eq!(renderer.frames[0].spotlight, Some([0.5, 0.75]));
    }

    #[test]
    fn delta_step_scales_with_frame_time() {
        let step = TimeStep::Delta { per_frame: 0.01 };
        assert!((step.step(None) - 0.01).abs() < 1e-7);
        // One 60 Hz frame equals one fixed step.
        let sixtieth = Duration::from_secs_f64(1.0 / 60.0);
        assert!((step.step(Some(sixtieth)) - 0.01).abs() < 1e-5);
        // A 30 Hz frame covers twice the distance.
        let thirtieth = Duration::from_secs_f64(1.0 / 30.0);
        assert!((step.step(Some(thirtieth)) - 0.02).abs() < 1e-5);
    }

    #[test]
    fn fixed_step_ignores_frame_time() {
        let step = TimeStep::Fixed(0.01);
        assert!((step.step(Some(Duration::from_secs(1))) - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn time_step_from_config() {
        let mut config = AnimationConfig::default();
        assert_eq!(TimeStep::from_config(&config), TimeStep::Fixed(0.01));
        config.time_mode = TimeMode::Delta;
        config.time_step = 0.02;
        assert_eq!(TimeStep::from_config(&config), TimeStep::Delta { per_frame: 0.02 });
    }
}
