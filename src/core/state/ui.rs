use crate::core::{
    cmd::{Cmd, FullscreenCommand},
    msg::ui::UiMsg,
};

/// Overlay progress added per UI tick when nothing else is configured
/// (50ms ticks over a 300ms transition).
const DEFAULT_TRANSITION_STEP: f64 = 50.0 / 300.0;

/// UI-related state
///
/// `show_info` is owned here and only changes on user action.
/// `is_fullscreen` mirrors the host: it is written only by
/// [`UiMsg::FullscreenChanged`], never by the toggle request itself.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub is_fullscreen: bool,
    pub show_info: bool,
    overlay_progress: f64,
    transition_step: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_fullscreen: false,
            show_info: false,
            overlay_progress: 0.0,
            transition_step: DEFAULT_TRANSITION_STEP,
        }
    }
}

impl UiState {
    /// Pace the overlay transition so it lasts `transition_ms` at `tick_rate` ticks per second.
    pub fn with_transition(tick_rate: f64, transition_ms: u64) -> Self {
        let transition_step = if tick_rate <= 0.0 || transition_ms == 0 {
            1.0
        } else {
            ((1000.0 / tick_rate) / transition_ms as f64).clamp(f64::EPSILON, 1.0)
        };
        Self {
            transition_step,
            ..Default::default()
        }
    }

    /// Enter/exit progress of the info overlay in `[0, 1]`
    pub fn overlay_progress(&self) -> f64 {
        self.overlay_progress
    }

    /// Whether any part of the overlay should be drawn
    pub fn overlay_visible(&self) -> bool {
        self.show_info || self.overlay_progress > 0.0
    }

    /// Number of UI ticks a full transition takes
    pub fn transition_steps(&self) -> u32 {
        (1.0 / self.transition_step).ceil() as u32
    }

    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::ToggleInfo => {
                self.show_info = !self.show_info;
                vec![Cmd::RequestRender]
            }

            UiMsg::HideInfo => {
                if self.show_info {
                    self.show_info = false;
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }

            UiMsg::AdvanceTransition => {
                let target = if self.show_info { 1.0 } else { 0.0 };
                if self.overlay_progress == target {
                    return vec![];
                }
                self.overlay_progress = if self.overlay_progress < target {
                    (self.overlay_progress + self.transition_step).min(target)
                } else {
                    (self.overlay_progress - self.transition_step).max(target)
                };
                vec![Cmd::RequestRender]
            }

            UiMsg::ToggleFullscreen => {
                let request = if self.is_fullscreen {
                    FullscreenCommand::Exit
                } else {
                    FullscreenCommand::Enter
                };
                vec![Cmd::Fullscreen(request)]
            }

            UiMsg::FullscreenChanged(is_fullscreen) => {
                if self.is_fullscreen == is_fullscreen {
                    return vec![];
                }
                log::debug!("Fullscreen mirror updated: {is_fullscreen}");
                self.is_fullscreen = is_fullscreen;
                vec![Cmd::RequestRender]
            }
        }
    }
}
