//! Adapter implementations for identity lookup ports.

pub mod memory;
pub mod postgres;
