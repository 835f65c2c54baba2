use gridiron_core::Seconds;
use thiserror::Error;

/// Domain-level errors for the game clock
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Time remaining {value}s is outside the allowed range 0..={max}s")]
    TimeRemainingOutOfRange { value: i64, max: Seconds },
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;
