//! Reusable widgets
//!
//! Widgets are plain `ratatui::widgets::Widget` values built from state
//! snapshots; they own no state between frames.

pub mod button;
pub mod dial;
pub mod footer_date;
pub mod info_panel;
