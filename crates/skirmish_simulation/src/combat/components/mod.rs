//! Combat components

pub mod hit_reaction;
pub mod melee;
pub mod stamina;

// Re-export all components
pub use hit_reaction::*;
pub use melee::*;
pub use stamina::*;
