//! Adapter implementations of the board ports.

pub mod fs;
pub mod memory;
