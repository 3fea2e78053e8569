//! Tick Overlay - per-tick debug snapshots of a 2D spatial simulation

pub mod core;
pub mod render;
pub mod scenario;
pub mod world;
