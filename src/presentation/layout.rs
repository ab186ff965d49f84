//! Screen layout and pointer hit testing
//!
//! The same layout is used to draw a frame and to resolve mouse clicks, so a
//! click always lands on what is on screen.

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

use crate::core::state::ui::UiState;

pub const CONTROLS_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const BUTTON_WIDTH: u16 = 20;
const BUTTON_GAP: u16 = 4;

const PANEL_MAX_WIDTH: u16 = 64;
const PANEL_MAX_HEIGHT: u16 = 14;
const PANEL_MIN_SCALE: f64 = 0.8;
/// Rows the panel sits below its resting place at the start of the transition
const PANEL_SLIDE_ROWS: f64 = 3.0;
const CLOSE_BUTTON_WIDTH: u16 = 22;

/// What a pointer position resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    FullscreenButton,
    InfoButton,
    /// The overlay's "return to time" button
    CloseButton,
    /// Inside the overlay panel
    Panel,
    /// The dimmed area around the overlay panel
    Backdrop,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub panel: Rect,
    pub close_button: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    /// Square (two columns per row) region holding the dial
    pub clock: Rect,
    pub fullscreen_button: Rect,
    pub info_button: Rect,
    pub footer: Rect,
    /// Present while any part of the overlay is drawn
    pub overlay: Option<OverlayLayout>,
    overlay_interactive: bool,
}

impl ScreenLayout {
    pub fn new(area: Rect, ui: &UiState) -> Self {
        let [body, controls, footer] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        let [fullscreen_button, info_button] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(BUTTON_GAP)
        .areas(controls);

        let overlay = ui
            .overlay_visible()
            .then(|| overlay_layout(area, ui.overlay_progress()));

        Self {
            area,
            clock: square_clock_area(body),
            fullscreen_button,
            info_button,
            footer,
            overlay,
            overlay_interactive: ui.show_info,
        }
    }

    /// Resolve a terminal cell to the element under it.
    ///
    /// While the overlay is shown it captures every click; the controls
    /// underneath are unreachable.
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let pos = Position::new(column, row);
        if !self.area.contains(pos) {
            return Hit::Nothing;
        }

        if self.overlay_interactive {
            return match self.overlay {
                Some(overlay) if overlay.close_button.contains(pos) => Hit::CloseButton,
                Some(overlay) if overlay.panel.contains(pos) => Hit::Panel,
                _ => Hit::Backdrop,
            };
        }

        if self.fullscreen_button.contains(pos) {
            Hit::FullscreenButton
        } else if self.info_button.contains(pos) {
            Hit::InfoButton
        } else {
            Hit::Nothing
        }
    }
}

/// Largest centered rect that looks square on a terminal with 1:2 cells.
fn square_clock_area(body: Rect) -> Rect {
    let rows = body.height.min(body.width / 2);
    let cols = rows * 2;
    Rect {
        x: body.x + (body.width - cols) / 2,
        y: body.y + (body.height - rows) / 2,
        width: cols,
        height: rows,
    }
}

fn overlay_layout(area: Rect, progress: f64) -> OverlayLayout {
    let progress = progress.clamp(0.0, 1.0);
    let scale = PANEL_MIN_SCALE + (1.0 - PANEL_MIN_SCALE) * progress;

    let full_width = area.width.saturating_sub(4).min(PANEL_MAX_WIDTH);
    let full_height = area.height.saturating_sub(2).min(PANEL_MAX_HEIGHT);
    let width = (f64::from(full_width) * scale).round() as u16;
    let height = (f64::from(full_height) * scale).round() as u16;
    let slide = ((1.0 - progress) * PANEL_SLIDE_ROWS).round() as u16;

    let x = area.x + (area.width - width) / 2;
    let y = (area.y + (area.height - height) / 2 + slide)
        .min(area.bottom().saturating_sub(height));
    let panel = Rect::new(x, y, width, height);

    // Button sits on the panel's last inner rows, above the bottom border
    let button_width = CLOSE_BUTTON_WIDTH.min(panel.width.saturating_sub(2));
    let close_button = Rect::new(
        panel.x + (panel.width - button_width) / 2,
        panel.bottom().saturating_sub(4).max(panel.y),
        button_width,
        3.min(panel.height),
    );

    OverlayLayout {
        panel,
        close_button,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::core::msg::ui::UiMsg;

    fn shown_ui() -> UiState {
        let mut ui = UiState::with_transition(20.0, 0);
        ui.update(UiMsg::ToggleInfo);
        ui.update(UiMsg::AdvanceTransition);
        ui
    }

    #[rstest]
    #[case(Rect::new(0, 0, 120, 40))]
    #[case(Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(0, 0, 200, 30))]
    fn test_clock_is_visually_square(#[case] area: Rect) {
        let layout = ScreenLayout::new(area, &UiState::default());
        assert_eq!(layout.clock.width, layout.clock.height * 2);
        assert!(layout.clock.bottom() <= layout.fullscreen_button.y);
    }

    #[test]
    fn test_controls_sit_above_footer() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40), &UiState::default());
        assert_eq!(layout.footer, Rect::new(0, 39, 120, 1));
        assert_eq!(layout.fullscreen_button.y, 36);
        assert_eq!(layout.info_button.y, 36);
        assert!(layout.fullscreen_button.right() < layout.info_button.x);
        assert!(layout.overlay.is_none());
    }

    #[test]
    fn test_hit_controls_without_overlay() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40), &UiState::default());
        let fs = layout.fullscreen_button;
        let info = layout.info_button;

        assert_eq!(layout.hit(fs.x + 1, fs.y + 1), Hit::FullscreenButton);
        assert_eq!(layout.hit(info.x + 1, info.y + 1), Hit::InfoButton);
        assert_eq!(layout.hit(0, 0), Hit::Nothing);
        assert_eq!(layout.hit(500, 500), Hit::Nothing);
    }

    #[test]
    fn test_overlay_captures_clicks() {
        let ui = shown_ui();
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40), &ui);
        let overlay = layout.overlay.expect("overlay is visible");
        let close = overlay.close_button;

        assert_eq!(layout.hit(close.x + 1, close.y + 1), Hit::CloseButton);
        assert_eq!(
            layout.hit(overlay.panel.x + 1, overlay.panel.y + 1),
            Hit::Panel
        );
        assert_eq!(layout.hit(0, 0), Hit::Backdrop);
        // the controls are covered by the backdrop
        let fs = layout.fullscreen_button;
        assert_eq!(layout.hit(fs.x + 1, fs.y + 1), Hit::Backdrop);
    }

    #[test]
    fn test_overlay_panel_grows_and_rises() {
        let area = Rect::new(0, 0, 120, 40);
        let start = overlay_layout(area, 0.0);
        let end = overlay_layout(area, 1.0);

        assert_eq!(end.panel.width, PANEL_MAX_WIDTH);
        assert_eq!(end.panel.height, PANEL_MAX_HEIGHT);
        assert!(start.panel.width < end.panel.width);
        assert!(start.panel.y > end.panel.y);
        assert!(end.panel.contains(Position::new(end.close_button.x, end.close_button.y)));
    }

    #[test]
    fn test_tiny_area_does_not_underflow() {
        let ui = shown_ui();
        let layout = ScreenLayout::new(Rect::new(0, 0, 3, 2), &ui);
        assert_eq!(layout.clock.width, layout.clock.height * 2);
        let overlay = layout.overlay.expect("overlay is visible");
        assert!(overlay.panel.width <= 3);
    }
}
