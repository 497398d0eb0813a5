//! I/O helpers for playground commands.

pub mod config;
