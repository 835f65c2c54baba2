use gridiron_core::{Seconds, format_clock};

/// Port for anything that exposes remaining game time
///
/// Implemented by every level of the clock hierarchy so that scoreboards,
/// persistence and rule engines can read time without knowing whether they
/// hold a quarter, a half or a whole game.
pub trait GameClock {
    /// Seconds of game time left at this level
    fn time_remaining(&self) -> Seconds;

    /// Returns true once no time is left
    fn is_expired(&self) -> bool {
        self.time_remaining() == 0
    }

    /// Remaining time rendered as `MM:SS`
    fn clock_reading(&self) -> String {
        format_clock(self.time_remaining())
    }
}
