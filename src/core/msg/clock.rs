use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Messages specific to ClockState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClockMsg {
    /// A fresh local wall-clock sample
    Sample(NaiveDateTime),
}

impl ClockMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, ClockMsg::Sample(_))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use color_eyre::Result;

    use super::*;

    #[test]
    fn clock_msg_serde() -> Result<()> {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_milli_opt(3, 4, 5, 678))
            .expect("valid datetime");
        let msg = ClockMsg::Sample(now);
        let s = serde_json::to_string(&msg)?;
        let back: ClockMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }
}
