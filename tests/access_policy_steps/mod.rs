//! Step definitions for assistant access policy scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
