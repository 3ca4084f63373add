//! Flourish CLI library.
//!
//! Command implementations for the `flourish` binary: random curves, point
//! dumps, neighbor listings, galleries and config resolution.

pub mod commands;
