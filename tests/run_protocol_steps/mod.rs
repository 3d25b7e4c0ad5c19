//! Step definitions for message run protocol scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
