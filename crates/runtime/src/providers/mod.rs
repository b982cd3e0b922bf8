//! Agent implementations.

pub mod reflex;
