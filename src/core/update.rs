use crate::core::{cmd::Cmd, msg::Msg, state::AppState};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        // Time samples (delegated to ClockState)
        Msg::Clock(clock_msg) => state.clock.update(clock_msg),

        // UI flags and overlay (delegated to UiState)
        Msg::Ui(ui_msg) => state.ui.update(ui_msg),
    };

    (state, commands)
}
