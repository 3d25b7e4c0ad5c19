//! Application services for assistant access control.

mod access;

pub use access::{AccessDenied, AccessGuard};
