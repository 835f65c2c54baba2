//! Gridiron Clock
//!
//! The countdown hierarchy of a game:
//!
//! ```text
//! Half (derived: sum of its quarters)
//!     │
//!     ├── Quarter (countdown clamped to 0..=900)
//!     │
//!     └── Quarter (countdown clamped to 0..=900)
//! ```
//!
//! ## Usage
//!
//! ```
//! use gridiron_clock::{GameClock, Half, HalfType};
//!
//! let mut half = Half::new(HalfType::First);
//! half.quarters_mut()[0].run_off(45);
//!
//! assert_eq!(half.time_remaining(), 1755);
//! assert_eq!(half.clock_reading(), "29:15");
//! ```

mod half;
mod quarter;
mod validation;

pub use half::Half;
pub use quarter::Quarter;
pub use validation::validate_time_remaining;

// Re-export the port and labels for convenience
pub use gridiron_core::{HalfType, QuarterType, Seconds};
pub use gridiron_ports::{ClockError, ClockResult, GameClock};
