//! GPU-free core of the hero scene.
//!
//! Holds the scene graph, shader uniforms, tween engine, input handlers,
//! transition controller, and the animation loop state machine. Nothing in
//! here touches wgpu: the renderer consumes a [`Scene`] through the
//! [`SceneRenderer`] trait, so every piece can be driven deterministically
//! from tests.

pub mod animation;
pub mod clock;
pub mod context;
pub mod easing;
pub mod error;
pub mod input;
pub mod math;
pub mod node;
pub mod scene;
pub mod shading;
pub mod transition;
pub mod tween;
pub mod uniforms;

pub use animation::{AnimationLoop, LoopState, SceneRenderer, TickOutcome, TimeStep};
pub use clock::{Clock, SystemClock};
pub use context::HeroContext;
pub use easing::Easing;
pub use error::SceneError;
pub use hero_config::schema::ScenePreset;
pub use input::{EnterButton, Viewport};
pub use node::{Geometry, MaterialKind, Mesh, PerspectiveCamera, PointLight, ShaderMaterial, Transform};
pub use scene::{Scene, SceneBuilder};
pub use transition::{Navigator, TransitionController, TransitionSettings, ZoomFrame};
pub use tween::{Interpolate, Tween, TweenEngine, TweenEvent, TweenId};
pub use uniforms::{TextureHandle, UniformKind, UniformSet, UniformValue};
