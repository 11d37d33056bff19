//! Movement domain: motion integration and ground contact
//!
//! Contains:
//! - integrator: smoothed horizontal velocity, gravity/jump, position delta
//! - ground: downward probe through `SpatialQuery`

pub mod ground;
pub mod integrator;

pub use ground::*;
pub use integrator::*;
