use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::{
    core::{
        msg::{clock::ClockMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::{
        config::keybindings::Action,
        layout::{Hit, ScreenLayout},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // UI ticks pace the overlay transition
        RawMsg::Tick => vec![Msg::Ui(UiMsg::AdvanceTransition)],
        RawMsg::Render => vec![],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::TimeSampled(now) => vec![Msg::Clock(ClockMsg::Sample(now))],
        RawMsg::FullscreenChanged(is_fullscreen) => {
            vec![Msg::Ui(UiMsg::FullscreenChanged(is_fullscreen))]
        }
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Get keybindings from config state (flat mapping)
    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(*action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ToggleFullscreen => vec![Msg::Ui(UiMsg::ToggleFullscreen)],
        Action::ToggleInfo => vec![Msg::Ui(UiMsg::ToggleInfo)],
        Action::CloseInfo => {
            if state.ui.show_info {
                vec![Msg::Ui(UiMsg::HideInfo)]
            } else {
                vec![]
            }
        }
    }
}

/// Left clicks are resolved against the layout that is currently on screen
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let viewport = state.system.viewport;
    let area = Rect::new(0, 0, viewport.width, viewport.height);
    let layout = ScreenLayout::new(area, &state.ui);

    match layout.hit(mouse.column, mouse.row) {
        Hit::CloseButton | Hit::Backdrop => vec![Msg::Ui(UiMsg::HideInfo)],
        // Clicks inside the panel are swallowed
        Hit::Panel => vec![],
        Hit::FullscreenButton => vec![Msg::Ui(UiMsg::ToggleFullscreen)],
        Hit::InfoButton => vec![Msg::Ui(UiMsg::ToggleInfo)],
        Hit::Nothing => vec![],
    }
}
