use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, FullscreenCommand, TuiCommand};

/// Command executor that hands Elm commands over to the host side
///
/// Nothing here touches the terminal directly: fullscreen and TUI requests
/// are forwarded to channels owned by the AppRunner, render requests are
/// collapsed into a bounded signal channel.
#[derive(Clone, Default)]
pub struct CmdExecutor {
    fullscreen_sender: Option<mpsc::UnboundedSender<FullscreenCommand>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    /// Create an executor with no host channels; host commands are dropped with a warning
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the fullscreen request channel.
    pub fn set_fullscreen_sender(&mut self, sender: mpsc::UnboundedSender<FullscreenCommand>) {
        self.fullscreen_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Fullscreen(request) => {
                if let Some(tx) = &self.fullscreen_sender {
                    tx.send(*request)?;
                } else {
                    log::warn!("Fullscreen {request:?} ignored: no fullscreen host configured");
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        tx.send(tui_cmd.clone())?;
                    } else {
                        log::warn!(
                            "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                        );
                    }
                }
            },

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // A full channel already holds a pending render
                    let _ = rtx.try_send(());
                }
            }
        }

        Ok(())
    }

    /// Execute commands in order, logging failures. Returns how many failed.
    pub fn execute_commands(&self, commands: &[Cmd]) -> usize {
        commands
            .iter()
            .filter(|cmd| match self.execute_command(cmd) {
                Ok(()) => {
                    log::trace!("Executed {}", cmd.name());
                    false
                }
                Err(e) => {
                    log::error!("Failed to execute {}: {e}", cmd.name());
                    true
                }
            })
            .count()
    }
}
