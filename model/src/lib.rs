//! # Portfolio Engine
//!
//! Headless controller for the portfolio single-page site, compiled to WASM.
//! The engine owns every piece of page state (pagination, gallery modal,
//! history, scroll spy, decorative animations) and never touches the DOM.
//!
//! ## Host contract
//!
//! ```text
//! JS event ──> engine.method(args, now_ms)
//!                 |
//!                 +── state mutates, timers arm against now_ms
//!                 +── effects queue up
//!
//! requestAnimationFrame ──> engine.tick(now) / engine.animation_frame(now, rects)
//!                 |
//!                 +── due timers fire in deadline order
//!                 +── frame buffer refreshed (read via frame_ptr/frame_len)
//!
//! JS ──> engine.drain_effects_json() ──> apply DOM writes, history calls
//! ```
//!
//! Effects are the only way state leaves the engine. The host applies them in
//! order and feeds the resulting events back in.

pub mod animation;
pub mod app;
pub mod catalog;
pub mod config;
pub mod content;
pub mod context;
pub mod effects;
pub mod error;
pub mod modal;
pub mod navigation;
pub mod pagination;
pub mod router;
pub mod timers;

pub use app::PortfolioEngine;
pub use config::EngineConfig;
pub use effects::Effect;
pub use error::{EngineError, Result};
