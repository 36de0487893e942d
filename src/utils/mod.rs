//! Shared low-level helpers

pub mod command;
pub mod file;
