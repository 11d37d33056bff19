//! Combat systems (ECS side of the damage pipeline)

pub mod damage;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod damage_tests;

pub use damage::*;
