//! I/O helpers for docfix commands.

pub mod config;
pub mod discover;
pub mod files;
