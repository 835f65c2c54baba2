use gridiron_core::{HalfType, QuarterType, Seconds, format_clock};
use gridiron_ports::GameClock;
use serde::{Deserialize, Serialize};

use crate::Quarter;

/// A half of the game, owning exactly two quarters
///
/// The quarters are built once from the half type and never rebuilt.
/// Remaining time is always derived from the live quarters, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Half {
    half_type: HalfType,
    quarters: [Quarter; 2],
}

impl Half {
    /// Create a half with two full-length quarters
    ///
    /// `HalfType::First` gets the first and second quarters; any other type,
    /// `GameOver` included, gets the third and fourth.
    pub fn new(half_type: HalfType) -> Self {
        let [opening, closing] = half_type.quarter_types();
        Self {
            half_type,
            quarters: [Quarter::new(opening), Quarter::new(closing)],
        }
    }

    pub fn half_type(&self) -> HalfType {
        self.half_type
    }

    /// Relabel the half. The owned quarters are left untouched.
    pub fn set_half_type(&mut self, half_type: HalfType) {
        self.half_type = half_type;
    }

    pub fn quarters(&self) -> &[Quarter; 2] {
        &self.quarters
    }

    /// Mutable access to the quarters, used by drivers to advance the clock in place
    pub fn quarters_mut(&mut self) -> &mut [Quarter; 2] {
        &mut self.quarters
    }

    /// Find a quarter by its current label
    pub fn quarter(&self, quarter_type: QuarterType) -> Option<&Quarter> {
        self.quarters
            .iter()
            .find(|q| q.quarter_type() == quarter_type)
    }

    pub fn quarter_mut(&mut self, quarter_type: QuarterType) -> Option<&mut Quarter> {
        self.quarters
            .iter_mut()
            .find(|q| q.quarter_type() == quarter_type)
    }

    /// The first quarter that still has time on its clock
    pub fn current_quarter(&self) -> Option<&Quarter> {
        self.quarters.iter().find(|q| !q.is_expired())
    }

    pub fn current_quarter_mut(&mut self) -> Option<&mut Quarter> {
        self.quarters.iter_mut().find(|q| !q.is_expired())
    }

    /// Sum of both quarters' countdowns
    pub fn time_remaining(&self) -> Seconds {
        self.quarters[0].time_remaining() + self.quarters[1].time_remaining()
    }
}

impl GameClock for Half {
    fn time_remaining(&self) -> Seconds {
        Half::time_remaining(self)
    }
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.half_type,
            format_clock(self.time_remaining())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_types(half: &Half) -> [QuarterType; 2] {
        [
            half.quarters()[0].quarter_type(),
            half.quarters()[1].quarter_type(),
        ]
    }

    #[test]
    fn test_first_half_quarters() {
        let half = Half::new(HalfType::First);
        assert_eq!(half.quarters().len(), 2);
        assert_eq!(
            quarter_types(&half),
            [QuarterType::First, QuarterType::Second]
        );
    }

    #[test]
    fn test_other_halves_get_closing_quarters() {
        for half_type in [HalfType::Second, HalfType::GameOver] {
            let half = Half::new(half_type);
            assert_eq!(half.half_type(), half_type);
            assert_eq!(
                quarter_types(&half),
                [QuarterType::Third, QuarterType::Fourth]
            );
        }
    }

    #[test]
    fn test_new_half_is_full_length() {
        for half_type in [HalfType::First, HalfType::Second, HalfType::GameOver] {
            assert_eq!(Half::new(half_type).time_remaining(), 1800);
        }
    }

    #[test]
    fn test_time_remaining_tracks_quarters() {
        let mut half = Half::new(HalfType::First);
        half.quarters_mut()[0].set_time_remaining(300);
        half.quarters_mut()[1].set_time_remaining(200);
        assert_eq!(half.time_remaining(), 500);

        half.quarters_mut()[1].set_time_remaining(0);
        assert_eq!(half.time_remaining(), 300);
        assert_eq!(half.time_remaining(), 300);
    }

    #[test]
    fn test_relabel_does_not_rebuild() {
        let mut half = Half::new(HalfType::First);
        half.quarters_mut()[0].set_time_remaining(120);
        let before = half.quarters().clone();

        half.set_half_type(HalfType::Second);

        assert_eq!(half.half_type(), HalfType::Second);
        assert_eq!(half.quarters(), &before);
        assert_eq!(
            quarter_types(&half),
            [QuarterType::First, QuarterType::Second]
        );
    }

    #[test]
    fn test_lookup_by_label() {
        let mut half = Half::new(HalfType::Second);
        assert!(half.quarter(QuarterType::First).is_none());

        if let Some(fourth) = half.quarter_mut(QuarterType::Fourth) {
            fourth.set_time_remaining(61);
        }
        assert_eq!(
            half.quarter(QuarterType::Fourth).map(Quarter::time_remaining),
            Some(61)
        );
    }

    #[test]
    fn test_current_quarter_advances() {
        let mut half = Half::new(HalfType::First);
        assert_eq!(
            half.current_quarter().map(Quarter::quarter_type),
            Some(QuarterType::First)
        );

        half.quarters_mut()[0].set_time_remaining(0);
        assert_eq!(
            half.current_quarter().map(Quarter::quarter_type),
            Some(QuarterType::Second)
        );

        if let Some(quarter) = half.current_quarter_mut() {
            quarter.run_off(900);
        }
        assert!(half.current_quarter().is_none());
        assert!(half.is_expired());
    }

    #[test]
    fn test_display() {
        let half = Half::new(HalfType::Second);
        assert_eq!(half.to_string(), "2nd Half 30:00");
    }
}
