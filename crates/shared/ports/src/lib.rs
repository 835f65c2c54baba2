//! Gridiron Ports
//!
//! Port definitions (traits) and domain errors for the gridiron game clock.
//! These define the boundary between the clock model and its consumers.

mod clock;
mod error;

pub use clock::GameClock;
pub use error::{ClockError, ClockResult};
