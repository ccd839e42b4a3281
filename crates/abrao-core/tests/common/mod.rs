//! Shared helpers for abrao-core integration tests

pub mod backend;
pub mod fixtures;
