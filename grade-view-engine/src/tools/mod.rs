//! Pointer-driven interaction tools.

pub mod picking;
