//! ECS components for simulation entities
//!
//! Organized by domain:
//! - actor: tag, body, health, death markers
//! - movement: MotionState, MotionParams, GroundProbe
//! - player: Player marker, look state
//! - ai: Enemy marker, target binding, chase tuning

pub mod actor;
pub mod movement;
pub mod player;
pub mod ai;

pub use actor::*;
pub use movement::*;
pub use player::*;
pub use ai::*;
