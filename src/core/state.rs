pub mod clock;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;

use clock::ClockState;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub clock: ClockState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config.
    ///
    /// `tick_rate` is the number of UI ticks per second; it paces the overlay
    /// transition together with `clock.overlay_transition_ms`.
    pub fn new_with_config(config: Config, tick_rate: f64) -> Self {
        let ui = UiState::with_transition(tick_rate, config.clock.overlay_transition_ms);
        Self {
            ui,
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Whether the overlay captures pointer input
    pub fn overlay_is_interactive(&self) -> bool {
        self.ui.show_info
    }
}
