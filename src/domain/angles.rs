use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Rotation of each clock hand, in degrees clockwise from 12 o'clock.
///
/// Every coarser hand sweeps continuously: the hour hand follows the minutes,
/// the minute hand follows the seconds and the second hand follows the
/// milliseconds. All values are in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    /// Compute the hand angles for the given wall-clock time.
    pub fn at<T: Timelike>(time: &T) -> Self {
        let hours = f64::from(time.hour() % 12);
        let minutes = f64::from(time.minute());
        let seconds = f64::from(time.second());
        // chrono encodes a leap second as nanosecond >= 1e9
        let millis = f64::from((time.nanosecond() / 1_000_000).min(999));

        Self {
            hour: (hours + minutes / 60.0) / 12.0 * 360.0,
            minute: (minutes + seconds / 60.0) / 60.0 * 360.0,
            second: (seconds + millis / 1000.0) / 60.0 * 360.0,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.hour, self.minute, self.second]
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn time(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).expect("valid time")
    }

    fn angle_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[rstest]
    #[case(time(0, 0, 0, 0), 0.0, 0.0, 0.0)]
    #[case(time(3, 0, 0, 0), 90.0, 0.0, 0.0)]
    #[case(time(0, 30, 0, 0), 15.0, 180.0, 0.0)]
    #[case(time(12, 0, 0, 0), 0.0, 0.0, 0.0)]
    #[case(time(15, 0, 0, 0), 90.0, 0.0, 0.0)]
    #[case(time(6, 0, 30, 500), 180.0, 3.0, 183.0)]
    #[case(time(9, 45, 15, 0), 292.5, 271.5, 90.0)]
    fn test_known_angles(
        #[case] t: NaiveTime,
        #[case] hour: f64,
        #[case] minute: f64,
        #[case] second: f64,
    ) {
        let angles = HandAngles::at(&t);
        assert!((angles.hour - hour).abs() < EPSILON, "hour {angles:?}");
        assert!((angles.minute - minute).abs() < EPSILON, "minute {angles:?}");
        assert!((angles.second - second).abs() < EPSILON, "second {angles:?}");
    }

    #[test]
    fn test_midnight_is_zero() {
        assert_eq!(HandAngles::at(&time(0, 0, 0, 0)), HandAngles::default());
    }

    #[test]
    fn test_angles_stay_in_range_over_a_day() {
        let start = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid datetime");
        let mut t: NaiveDateTime = start;
        while t < start + Duration::days(1) {
            for angle in HandAngles::at(&t).as_array() {
                assert!((0.0..360.0).contains(&angle), "{angle} at {t}");
            }
            t += Duration::milliseconds(997);
        }
    }

    #[test]
    fn test_end_of_day_is_below_full_turn() {
        let angles = HandAngles::at(&time(23, 59, 59, 999));
        for angle in angles.as_array() {
            assert!(angle < 360.0);
        }
    }

    #[test]
    fn test_leap_second_is_clamped() {
        let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).expect("leap second");
        let angles = HandAngles::at(&leap);
        assert!(angles.second < 360.0);
    }

    #[test]
    fn test_angles_are_continuous() {
        // 50ms steps, as sampled by the clock
        let start = NaiveDate::from_ymd_opt(2026, 1, 1)
            .and_then(|d| d.and_hms_opt(11, 58, 0))
            .expect("valid datetime");
        let step = Duration::milliseconds(50);
        let mut prev = HandAngles::at(&start);
        let mut t = start + step;
        while t < start + Duration::minutes(4) {
            let next = HandAngles::at(&t);
            // second hand moves 0.3 degrees per 50ms
            assert!(angle_distance(prev.second, next.second) <= 0.3 + EPSILON);
            // minute hand moves at most 6 degrees/min, stepping once per second
            assert!(angle_distance(prev.minute, next.minute) <= 0.1 + EPSILON);
            // hour hand moves 0.5 degrees per minute
            assert!(angle_distance(prev.hour, next.hour) <= 0.5 + EPSILON);
            prev = next;
            t += step;
        }
    }
}
