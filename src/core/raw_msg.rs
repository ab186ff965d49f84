use chrono::NaiveDateTime;
use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (terminal, clock, fullscreen host)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Mouse(MouseEvent),

    // Time source
    TimeSampled(NaiveDateTime),

    // Fullscreen host notifications and controller outcomes
    FullscreenChanged(bool),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick | RawMsg::Render | RawMsg::TimeSampled(_) | RawMsg::Mouse(_)
        )
    }
}
