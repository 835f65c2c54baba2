use gridiron_core::{QUARTER_SECONDS, QuarterType, Seconds, format_clock};
use gridiron_ports::{ClockResult, GameClock};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::validation::validate_time_remaining;

/// One quarter of game time with a self-clamping countdown
///
/// The countdown always stays within `0..=QUARTER_SECONDS`. Writes outside
/// that range are clamped silently rather than rejected, so every integer
/// maps to a valid stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuarterRecord")]
pub struct Quarter {
    quarter_type: QuarterType,
    time_remaining: Seconds,
}

/// Wire shape of a quarter before the countdown is clamped
#[derive(Deserialize)]
struct QuarterRecord {
    quarter_type: QuarterType,
    time_remaining: i64,
}

impl From<QuarterRecord> for Quarter {
    fn from(record: QuarterRecord) -> Self {
        let mut quarter = Quarter::new(record.quarter_type);
        quarter.set_time_remaining(record.time_remaining);
        quarter
    }
}

impl Quarter {
    /// Create a full-length quarter
    ///
    /// The countdown starts at `QUARTER_SECONDS` whatever the label is,
    /// including `Overtime` and `GameOver`.
    pub fn new(quarter_type: QuarterType) -> Self {
        let mut quarter = Self {
            quarter_type,
            time_remaining: 0,
        };
        quarter.set_time_remaining(i64::from(QUARTER_SECONDS));
        quarter
    }

    pub fn quarter_type(&self) -> QuarterType {
        self.quarter_type
    }

    /// Relabel the quarter. No check is made against its position in the game.
    pub fn set_quarter_type(&mut self, quarter_type: QuarterType) {
        self.quarter_type = quarter_type;
    }

    /// Seconds left in this quarter
    pub fn time_remaining(&self) -> Seconds {
        self.time_remaining
    }

    /// Store a new countdown value, clamped to `0..=QUARTER_SECONDS`
    ///
    /// Evaluated in order: `value >= QUARTER_SECONDS` stores the full length,
    /// `value <= 0` stores zero, anything else is stored as given.
    pub fn set_time_remaining(&mut self, value: i64) {
        let max = i64::from(QUARTER_SECONDS);
        let clamped = if value >= max {
            QUARTER_SECONDS
        } else if value <= 0 {
            0
        } else {
            value as Seconds
        };

        if i64::from(clamped) != value {
            trace!(
                "{} countdown write {} clamped to {}",
                self.quarter_type, value, clamped
            );
        }

        self.time_remaining = clamped;
    }

    /// Run `elapsed` seconds off the clock
    ///
    /// Negative values add time back; the result is clamped like any other write.
    pub fn run_off(&mut self, elapsed: i64) {
        let next = i64::from(self.time_remaining).saturating_sub(elapsed);
        self.set_time_remaining(next);
    }

    /// Check the stored countdown against the declared `0..=QUARTER_SECONDS` bound
    pub fn validate(&self) -> ClockResult<()> {
        validate_time_remaining(i64::from(self.time_remaining)).map(|_| ())
    }
}

impl GameClock for Quarter {
    fn time_remaining(&self) -> Seconds {
        self.time_remaining
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.quarter_type,
            format_clock(self.time_remaining)
        )
    }
}
