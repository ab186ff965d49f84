//! Clock face component
//!
//! Picks the dial metrics for the current terminal width and fullscreen
//! mirror, then draws the dial with the latest hand angles.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::dial::{Breakpoint, DialMetrics},
    presentation::widgets::dial::DialWidget,
};

#[derive(Debug, Clone, Default)]
pub struct ClockFaceComponent;

impl ClockFaceComponent {
    pub fn new() -> Self {
        Self
    }

    /// Metrics for a terminal `columns` wide
    pub fn metrics(&self, state: &AppState, columns: u16) -> DialMetrics {
        let compact_below = state.config.config.clock.compact_breakpoint_columns;
        DialMetrics::select(
            Breakpoint::from_width(columns, compact_below),
            state.ui.is_fullscreen,
        )
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let metrics = self.metrics(state, frame.area().width);
        let dial = DialWidget::new(
            state.clock.angles(),
            metrics,
            &state.config.config.styles,
        );
        frame.render_widget(dial, area);
    }
}
