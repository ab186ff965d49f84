//! Info overlay component

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::keybindings::Action, layout::ScreenLayout, widgets::info_panel::InfoPanelWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct InfoOverlayComponent;

impl InfoOverlayComponent {
    pub fn new() -> Self {
        Self
    }

    /// Draws nothing unless the overlay is shown or still fading out.
    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &ScreenLayout) {
        let Some(overlay) = layout.overlay else {
            return;
        };
        let config = &state.config.config;
        let panel = InfoPanelWidget::new(overlay, &config.styles)
            .close_hint(config.keybindings.hint_for(Action::CloseInfo));
        frame.render_widget(panel, layout.area);
    }
}
