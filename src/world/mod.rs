//! Read-only view of simulation state consumed by the overlay.
//!
//! The overlay never mutates the simulation; it only reads positions,
//! radii, ids and world dimensions through these traits.

pub mod snapshot;

pub use snapshot::{Planet, Ship, WorldSnapshot};

use crate::core::types::{PlayerId, Point, ProcessId, Tick};

/// Anything with a position and a radius in simulation units
pub trait Entity {
    fn position(&self) -> Point;

    fn radius(&self) -> f64;
}

/// Bare points are zero-radius entities, so paths can be drawn from
/// plain coordinates.
impl Entity for Point {
    fn position(&self) -> Point {
        *self
    }

    fn radius(&self) -> f64 {
        0.0
    }
}

impl<E: Entity + ?Sized> Entity for &E {
    fn position(&self) -> Point {
        (**self).position()
    }

    fn radius(&self) -> f64 {
        (**self).radius()
    }
}

/// Accessors the overlay needs from the running simulation
pub trait WorldView {
    /// World width in simulation units
    fn width(&self) -> f64;

    /// World height in simulation units
    fn height(&self) -> f64;

    fn process_id(&self) -> ProcessId;

    fn tick(&self) -> Tick;

    /// The player this process plays as
    fn me(&self) -> PlayerId;

    fn planets(&self) -> &[Planet];

    fn ships(&self) -> &[Ship];
}
