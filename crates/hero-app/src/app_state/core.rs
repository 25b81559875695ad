//! HeroApp struct definition and constructor.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use winit::window::Window;

use hero_config::schema::HeroConfig;
use hero_renderer::{FrameTimer, RenderState};
use hero_scene::{AnimationLoop, HeroContext, SystemClock, TimeStep};

use super::navigation::BrowserNavigator;
use super::types::AssetEvent;

/// Top-level application state.
pub struct HeroApp {
    pub(super) config: HeroConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Scene state shared by input handlers and the animation loop
    pub(super) ctx: Option<HeroContext<BrowserNavigator>>,
    pub(super) animation: AnimationLoop,
    pub(super) clock: SystemClock,

    // Decoded assets arriving from the loader thread
    pub(super) asset_rx: Option<Receiver<AssetEvent>>,

    pub(super) frame_timer: FrameTimer,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl HeroApp {
    pub fn new(config: HeroConfig) -> Self {
        let animation = AnimationLoop::for_preset(
            config.scene.preset,
            TimeStep::from_config(&config.animation),
        );
        Self {
            config,
            window: None,
            render_state: None,
            ctx: None,
            animation,
            clock: SystemClock::new(),
            asset_rx: None,
            frame_timer: FrameTimer::new(),
            should_exit: false,
        }
    }
}
