use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    ToggleInfo,
    HideInfo,
    /// Step the overlay enter/exit transition by one UI tick
    AdvanceTransition,

    /// Ask the host to enter or leave fullscreen
    ToggleFullscreen,
    /// The host's fullscreen state, as observed
    FullscreenChanged(bool),
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::AdvanceTransition)
    }
}
