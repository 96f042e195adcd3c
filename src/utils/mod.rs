//! Shared helpers for input limits.

pub mod validation;
