//! Host fact collection

pub mod memory;
pub mod packages;
pub mod system;
