//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, asset loading, the hero context, and the
//! renderer.

mod assets;
mod core;
mod event_handler;
mod init;
mod navigation;
mod polling;
mod render;
mod types;

pub use core::HeroApp;
