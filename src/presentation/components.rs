//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.
//! The screen layout is computed once per frame and shared by all of them,
//! the same layout the translator uses for mouse hit testing.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::ScreenLayout};

pub mod clock_face;
pub mod controls;
pub mod footer;
pub mod info_overlay;

pub use clock_face::ClockFaceComponent;
pub use controls::ControlsComponent;
pub use footer::FooterComponent;
pub use info_overlay::InfoOverlayComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub clock_face: ClockFaceComponent,
    pub controls: ControlsComponent,
    pub footer: FooterComponent,
    pub info_overlay: InfoOverlayComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components, back to front
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let layout = ScreenLayout::new(area, &state.ui);

        if let Some(bg) = state.config.config.styles.get_or_default("background").bg {
            frame.buffer_mut().set_style(area, Style::default().bg(bg));
        }

        self.clock_face.view(state, frame, layout.clock);
        self.controls.view(state, frame, &layout);
        self.footer.view(state, frame, layout.footer);
        // Overlay last so it covers everything else
        self.info_overlay.view(state, frame, &layout);
    }
}
