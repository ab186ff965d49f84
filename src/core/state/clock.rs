use chrono::NaiveDateTime;

use crate::core::{cmd::Cmd, msg::clock::ClockMsg};
use crate::domain::angles::HandAngles;

/// Latest time sample and the hand angles derived from it
///
/// Both fields only change together through [`ClockState::update`], so the
/// angles are always a pure function of the last sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockState {
    sample: Option<NaiveDateTime>,
    angles: HandAngles,
}

impl ClockState {
    pub fn sample(&self) -> Option<NaiveDateTime> {
        self.sample
    }

    pub fn angles(&self) -> HandAngles {
        self.angles
    }

    /// Clock-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ClockMsg) -> Vec<Cmd> {
        match msg {
            ClockMsg::Sample(now) => {
                self.sample = Some(now);
                self.angles = HandAngles::at(&now);
                vec![Cmd::RequestRender]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid datetime")
    }

    #[test]
    fn test_sample_recomputes_angles() {
        let mut clock = ClockState::default();
        let cmds = clock.update(ClockMsg::Sample(at(3, 0, 0)));

        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(clock.sample(), Some(at(3, 0, 0)));
        assert_eq!(clock.angles().hour, 90.0);
    }

    #[test]
    fn test_latest_sample_replaces_previous() {
        let mut clock = ClockState::default();
        clock.update(ClockMsg::Sample(at(3, 0, 0)));
        clock.update(ClockMsg::Sample(at(0, 30, 0)));

        assert_eq!(clock.sample(), Some(at(0, 30, 0)));
        assert_eq!(clock.angles(), HandAngles::at(&at(0, 30, 0)));
        assert_eq!(clock.angles().hour, 15.0);
    }
}
