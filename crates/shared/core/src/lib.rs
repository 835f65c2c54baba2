//! Gridiron Core Domain
//!
//! Pure domain types for the gridiron game clock.
//! This crate contains no I/O and no logging, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{HalfType, QuarterType, Team};
pub use values::{HALF_SECONDS, QUARTER_SECONDS, Seconds, as_duration, format_clock};
