//! Shared domain: per-frame context and collaborator contracts
//!
//! - frame: FrameContext, InputSnapshot (explicit per-tick inputs)
//! - services: traits for the engine-side collaborators (raycasts, mover,
//!   animation puppet, HUD, lifecycle)

pub mod frame;
pub mod services;

pub use frame::*;
pub use services::*;
