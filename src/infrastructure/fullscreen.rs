//! Terminal fullscreen
//!
//! Fullscreen is requested with the XTWINOPS window operation `CSI 10 ; 1 t`
//! and left with `CSI 10 ; 0 t`. Terminals give no acknowledgement, so the
//! host tracks its own state and infers an exit made elsewhere (a window
//! manager shortcut, say) from the terminal shrinking back to the size it had
//! before the request.

use std::fmt;
use std::io::{self, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};

use crossterm::{Command, ExecutableCommand};
use thiserror::Error;

use crate::core::cmd::FullscreenCommand;

#[derive(Error, Debug)]
pub enum FullscreenError {
    #[error("fullscreen is not supported here: {0}")]
    Unsupported(String),

    #[error("failed to write fullscreen request: {0}")]
    Io(#[from] io::Error),
}

/// Whether the user's terminal was left fullscreen by this process
static TERMINAL_FULLSCREEN: AtomicBool = AtomicBool::new(false);

/// Undo a fullscreen request still in effect on the user's terminal.
///
/// For the panic hook, which has no access to the running controller.
/// Returns whether anything was written.
pub fn leave_fullscreen_after_panic(writer: &mut impl Write) -> io::Result<bool> {
    leave_if_set(&TERMINAL_FULLSCREEN, writer)
}

fn leave_if_set(flag: &AtomicBool, writer: &mut impl Write) -> io::Result<bool> {
    if !flag.swap(false, Ordering::SeqCst) {
        return Ok(false);
    }
    writer.execute(LeaveFullscreen)?;
    Ok(true)
}

/// Something that can be asked to go fullscreen and report when it leaves
pub trait FullscreenHost: Send {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;
    fn is_fullscreen(&self) -> bool;
    /// Feed a terminal resize; returns the new state when it changed
    /// without going through this host.
    fn observe_resize(&mut self, width: u16, height: u16) -> Option<bool>;
}

/// `CSI 10 ; 1 t`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterFullscreen;

/// `CSI 10 ; 0 t`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveFullscreen;

impl Command for EnterFullscreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;1t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "fullscreen requires ANSI support",
        ))
    }
}

impl Command for LeaveFullscreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;0t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "fullscreen requires ANSI support",
        ))
    }
}

/// XTWINOPS fullscreen on a terminal reached through `writer`
pub struct TerminalFullscreen<W: Write + Send> {
    writer: W,
    enabled: bool,
    term: Option<String>,
    active: bool,
    /// Mirrors `active` for [`leave_fullscreen_after_panic`]
    published: Option<&'static AtomicBool>,
    /// Size before the last successful request
    windowed: Option<(u16, u16)>,
    /// Whether the terminal grew past `windowed` since the request
    grown: bool,
    last_size: Option<(u16, u16)>,
}

impl<W: Write + Send> TerminalFullscreen<W> {
    /// The user's terminal: uses `$TERM` to decide support, and lets the
    /// panic hook leave fullscreen.
    pub fn new(writer: W, enabled: bool) -> Self {
        let mut host = Self::with_term(writer, enabled, std::env::var("TERM").ok());
        host.published = Some(&TERMINAL_FULLSCREEN);
        host
    }

    pub fn with_term(writer: W, enabled: bool, term: Option<String>) -> Self {
        Self {
            writer,
            enabled,
            term,
            active: false,
            published: None,
            windowed: None,
            grown: false,
            last_size: None,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        if let Some(flag) = self.published {
            flag.store(active, Ordering::SeqCst);
        }
    }

    fn check_supported(&self) -> Result<(), FullscreenError> {
        if !self.enabled {
            return Err(FullscreenError::Unsupported(
                "disabled by fullscreen.escape_sequences".to_string(),
            ));
        }
        match self.term.as_deref() {
            None | Some("") => Err(FullscreenError::Unsupported("TERM is not set".to_string())),
            Some(term @ ("dumb" | "linux")) => Err(FullscreenError::Unsupported(format!(
                "terminal `{term}` has no window operations"
            ))),
            Some(_) => Ok(()),
        }
    }
}

impl<W: Write + Send> FullscreenHost for TerminalFullscreen<W> {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.check_supported()?;
        self.writer.execute(EnterFullscreen)?;
        self.set_active(true);
        self.windowed = self.last_size;
        self.grown = false;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.check_supported()?;
        self.writer.execute(LeaveFullscreen)?;
        self.set_active(false);
        self.windowed = None;
        self.grown = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn observe_resize(&mut self, width: u16, height: u16) -> Option<bool> {
        self.last_size = Some((width, height));
        if !self.active {
            return None;
        }
        let (windowed_width, windowed_height) = self.windowed?;
        let fits_window = width <= windowed_width && height <= windowed_height;

        if !fits_window {
            self.grown = true;
            None
        } else if self.grown {
            log::info!("Terminal shrank back to {width}x{height}; fullscreen was left");
            self.set_active(false);
            self.windowed = None;
            self.grown = false;
            Some(false)
        } else {
            None
        }
    }
}

/// Best-effort front for a [`FullscreenHost`]
///
/// Failures are logged and swallowed; the return values are the new host
/// state to mirror, when there is one.
pub struct FullscreenController {
    host: Box<dyn FullscreenHost>,
}

impl FullscreenController {
    pub fn new(host: Box<dyn FullscreenHost>) -> Self {
        Self { host }
    }

    pub fn execute(&mut self, command: FullscreenCommand) -> Option<bool> {
        match command {
            FullscreenCommand::Enter => self.enter(),
            FullscreenCommand::Exit => self.exit(),
        }
    }

    pub fn enter(&mut self) -> Option<bool> {
        match self.host.request_fullscreen() {
            Ok(()) => {
                log::info!("Entered fullscreen");
                Some(true)
            }
            Err(e) => {
                log::error!("Error attempting to enable fullscreen: {e}");
                None
            }
        }
    }

    /// Only asks the host when it is actually fullscreen.
    pub fn exit(&mut self) -> Option<bool> {
        if !self.host.is_fullscreen() {
            log::debug!("Exit fullscreen ignored: host is not fullscreen");
            return None;
        }
        match self.host.exit_fullscreen() {
            Ok(()) => {
                log::info!("Left fullscreen");
                Some(false)
            }
            Err(e) => {
                log::error!("Error attempting to exit fullscreen: {e}");
                None
            }
        }
    }

    pub fn observe_resize(&mut self, width: u16, height: u16) -> Option<bool> {
        self.host.observe_resize(width, height)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.host.is_fullscreen()
    }

    /// Leave fullscreen on teardown. Returns whether the host ends up windowed.
    pub fn release(&mut self) -> bool {
        // exit logs its own failure
        self.exit().is_some() || !self.host.is_fullscreen()
    }
}

#[derive(Debug, Default)]
struct FakeHostState {
    fullscreen: bool,
    failure: Option<String>,
    enter_requests: usize,
    exit_requests: usize,
    pending_change: Option<bool>,
}

/// In-memory [`FullscreenHost`] for tests
///
/// Clones share state, so a test can keep one handle after boxing another
/// into a controller.
#[derive(Debug, Clone, Default)]
pub struct FakeFullscreenHost {
    state: Arc<Mutex<FakeHostState>>,
}

impl FakeFullscreenHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeHostState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Make every following request fail with `Unsupported(reason)`.
    pub fn fail_with(&self, reason: &str) {
        self.lock().failure = Some(reason.to_string());
    }

    /// The user leaves fullscreen outside the app; reported on the next resize.
    pub fn simulate_host_exit(&self) {
        let mut state = self.lock();
        state.fullscreen = false;
        state.pending_change = Some(false);
    }

    pub fn enter_requests(&self) -> usize {
        self.lock().enter_requests
    }

    pub fn exit_requests(&self) -> usize {
        self.lock().exit_requests
    }
}

impl FullscreenHost for FakeFullscreenHost {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        let mut state = self.lock();
        state.enter_requests += 1;
        if let Some(reason) = &state.failure {
            return Err(FullscreenError::Unsupported(reason.clone()));
        }
        state.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        let mut state = self.lock();
        state.exit_requests += 1;
        if let Some(reason) = &state.failure {
            return Err(FullscreenError::Unsupported(reason.clone()));
        }
        state.fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.lock().fullscreen
    }

    fn observe_resize(&mut self, _width: u16, _height: u16) -> Option<bool> {
        self.lock().pending_change.take()
    }
}
