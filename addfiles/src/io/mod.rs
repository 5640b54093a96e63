//! I/O helpers for addfiles commands.

pub mod config;
pub mod probe;
