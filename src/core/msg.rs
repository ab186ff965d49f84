use serde::{Deserialize, Serialize};

pub mod clock;
pub mod system;
pub mod ui;

use clock::ClockMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Time samples (delegated to ClockState)
    Clock(ClockMsg),

    // UI flags and overlay (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Clock(msg) => msg.is_frequent(),
            Msg::Ui(msg) => msg.is_frequent(),
        }
    }
}
