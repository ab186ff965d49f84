//! Fullscreen and info buttons

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::keybindings::Action, layout::ScreenLayout, widgets::button::ButtonWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ControlsComponent;

impl ControlsComponent {
    pub fn new() -> Self {
        Self
    }

    /// The fullscreen button offers the opposite of the mirrored host state
    pub fn fullscreen_label(&self, state: &AppState) -> &'static str {
        if state.ui.is_fullscreen {
            "EXIT FULLSCREEN"
        } else {
            "FULLSCREEN"
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &ScreenLayout) {
        let config = &state.config.config;
        let style = config.styles.get_or_default("control");

        let fullscreen = ButtonWidget::new(self.fullscreen_label(state), style)
            .hint(config.keybindings.hint_for(Action::ToggleFullscreen));
        let info = ButtonWidget::new("INFO", style)
            .hint(config.keybindings.hint_for(Action::ToggleInfo));

        frame.render_widget(fullscreen, layout.fullscreen_button);
        frame.render_widget(info, layout.info_button);
    }
}
