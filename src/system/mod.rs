//! Thin wrappers over the host operating system.

pub mod info;
pub mod signal;
