use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::footer_date::FooterDateWidget};

#[derive(Debug, Clone, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let date = state.clock.sample().map(|now| now.date());
        let style = state.config.config.styles.get_or_default("footer");
        frame.render_widget(FooterDateWidget::new(date, style), area);
    }
}
