use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::{
    core::{
        cmd::Cmd, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    infrastructure::config::Config,
    presentation::layout::ScreenLayout,
};

/// A local datetime on a fixed day, for tests
pub fn local_time(hour: u32, minute: u32, second: u32, milli: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_milli_opt(hour, minute, second, milli))
        .unwrap_or_default()
}

/// Drives raw input through translate and update without a terminal
/// Provides a fluent API for common test patterns and reduces boilerplate
pub struct ClockTestHelper {
    state: AppState,
    commands: Vec<Cmd>,
}

impl Default for ClockTestHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockTestHelper {
    /// Embedded config, 20 ticks per second, a 120x40 terminal
    pub fn new() -> Self {
        Self::with_size(120, 40)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let config = Config::defaults().unwrap_or_default();
        let mut helper = Self {
            state: AppState::new_with_config(config, 20.0),
            commands: vec![],
        };
        helper.raw(RawMsg::Resize(width, height));
        helper.commands.clear();
        helper
    }

    /// Feed a raw message, remembering the commands it produced
    pub fn raw(&mut self, raw: RawMsg) -> &mut Self {
        let msgs = translate_raw_to_domain(raw, &self.state);
        for msg in msgs {
            let (state, commands) = update(msg, std::mem::take(&mut self.state));
            self.state = state;
            self.commands.extend(commands);
        }
        self
    }

    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.raw(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn click(&mut self, column: u16, row: u16) -> &mut Self {
        self.raw(RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    pub fn sample(&mut self, now: NaiveDateTime) -> &mut Self {
        self.raw(RawMsg::TimeSampled(now))
    }

    /// The fullscreen host reports its state
    pub fn host_reports(&mut self, is_fullscreen: bool) -> &mut Self {
        self.raw(RawMsg::FullscreenChanged(is_fullscreen))
    }

    /// Tick until the overlay transition has finished
    pub fn settle_overlay(&mut self) -> &mut Self {
        for _ in 0..=self.state.ui.transition_steps() {
            self.raw(RawMsg::Tick);
        }
        self
    }

    /// The layout the translator hit-tests against right now
    pub fn layout(&self) -> ScreenLayout {
        let viewport = self.state.system.viewport;
        ScreenLayout::new(Rect::new(0, 0, viewport.width, viewport.height), &self.state.ui)
    }

    /// Click the middle of a rect
    pub fn click_center(&mut self, rect: Rect) -> &mut Self {
        self.click(rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Commands produced since the last call
    pub fn take_commands(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_overlay_settled(&self) -> bool {
        let target = if self.state.ui.show_info { 1.0 } else { 0.0 };
        self.state.ui.overlay_progress() == target
    }
}
