/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Fullscreen requests, executed best-effort by the fullscreen controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenCommand {
    Enter,
    Exit,
}

/// Elm-like command definitions
/// Represents side effects requested by the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    // Host-related commands
    Fullscreen(FullscreenCommand),

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via bounded render_req_sender and coalesced by AppRunner
    RequestRender,
}

impl Cmd {
    /// Get command name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Fullscreen(FullscreenCommand::Enter) => "EnterFullscreen",
            Cmd::Fullscreen(FullscreenCommand::Exit) => "ExitFullscreen",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)",
            Cmd::RequestRender => "RequestRender",
        }
    }
}
