use gridiron_core::{QUARTER_SECONDS, Seconds};
use gridiron_ports::{ClockError, ClockResult};

/// Declared bound on a quarter countdown, for validation layers that
/// inspect raw values before they reach [`crate::Quarter::set_time_remaining`].
///
/// Unlike the setter this rejects instead of clamping.
pub fn validate_time_remaining(value: i64) -> ClockResult<Seconds> {
    if (0..=i64::from(QUARTER_SECONDS)).contains(&value) {
        Ok(value as Seconds)
    } else {
        Err(ClockError::TimeRemainingOutOfRange {
            value,
            max: QUARTER_SECONDS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(validate_time_remaining(0), Ok(0));
        assert_eq!(validate_time_remaining(900), Ok(900));
        assert_eq!(validate_time_remaining(37), Ok(37));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            validate_time_remaining(901),
            Err(ClockError::TimeRemainingOutOfRange {
                value: 901,
                max: 900
            })
        );
        assert!(validate_time_remaining(-1).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = validate_time_remaining(-5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Time remaining -5s is outside the allowed range 0..=900s"
        );
    }
}
