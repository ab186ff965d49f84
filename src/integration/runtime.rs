use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, FullscreenCommand, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Owns the state and drives translate, update and execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without an executor; commands stay queued
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: None,
        }
    }

    /// Create a new Runtime with command executor
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new());
        runtime
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor, String> {
        self.cmd_executor
            .as_mut()
            .ok_or_else(|| "No executor available. Use new_with_executor() first.".to_string())
    }

    /// Route fullscreen requests to the host
    pub fn add_fullscreen_sender(
        &mut self,
        sender: mpsc::UnboundedSender<FullscreenCommand>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_fullscreen_sender(sender);
        Ok(())
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::Sender<()>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_render_request_sender(render_sender);
        Ok(())
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::trace!("raw: {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Take pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor.
    /// Returns how many commands failed.
    pub fn execute_pending_commands(&mut self) -> Result<usize, String> {
        if self.cmd_executor.is_none() {
            return Err(
                "No command executor available. Use new_with_executor() to configure.".to_string(),
            );
        }

        let commands = self.pending_commands();
        match &self.cmd_executor {
            Some(executor) => Ok(executor.execute_commands(&commands)),
            None => Ok(0),
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state as it was when they arrived
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step.
    /// Returns how many commands failed.
    pub fn run_update_cycle(&mut self) -> Result<usize, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            has_sample: self.state.clock.sample().is_some(),
            is_fullscreen: self.state.ui.is_fullscreen,
            is_info_shown: self.state.ui.show_info,
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub has_sample: bool,
    pub is_fullscreen: bool,
    pub is_info_shown: bool,
    pub has_executor: bool,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::{system::SystemMsg, ui::UiMsg};
    use crate::infrastructure::config::Config;

    fn create_test_runtime() -> Runtime {
        let config = Config::defaults().expect("embedded config parses");
        Runtime::new(AppState::new_with_config(config, 20.0))
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert!(!stats.has_sample);
        assert!(!stats.is_info_shown);
        assert!(!stats.has_executor);
    }

    #[test]
    fn test_send_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Ui(UiMsg::ToggleInfo));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();
        let stats = runtime.get_stats();
        assert_eq!(stats.queued_messages, 0);
        assert!(stats.is_info_shown);
        assert_eq!(commands, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_raw_key_flows_through_translator() {
        let mut runtime = create_test_runtime();
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('f'),
            KeyModifiers::NONE,
        )));

        let commands = runtime.process_all_messages();
        assert_eq!(commands, vec![Cmd::Fullscreen(FullscreenCommand::Enter)]);
        // The mirror only moves on the host's answer
        assert!(!runtime.state().ui.is_fullscreen);

        runtime.send_raw_msg(RawMsg::FullscreenChanged(true));
        runtime.process_all_messages();
        assert!(runtime.get_stats().is_fullscreen);
    }

    #[test]
    fn test_raw_messages_see_earlier_updates() {
        let mut runtime = create_test_runtime();
        // Esc only closes an open overlay, so it has to see the toggle first
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('i'),
            KeyModifiers::NONE,
        )));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));

        runtime.process_all_messages();
        assert!(!runtime.state().ui.show_info);
    }

    #[test]
    fn test_sample_reaches_clock_state() {
        let mut runtime = create_test_runtime();
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(6, 30, 0))
            .expect("valid datetime");

        runtime.send_raw_msg(RawMsg::TimeSampled(now));
        assert!(!runtime.get_stats().has_sample);

        runtime.process_all_messages();
        assert_eq!(runtime.state().clock.sample(), Some(now));
        assert!(runtime.get_stats().has_sample);
    }

    #[test]
    fn test_pending_commands() {
        let mut runtime = create_test_runtime();
        runtime.process_message(Msg::Ui(UiMsg::ToggleFullscreen));
        runtime.process_message(Msg::System(SystemMsg::Resize(80, 24)));

        assert_eq!(runtime.pending_commands().len(), 2);
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_execute_without_executor() {
        let mut runtime = create_test_runtime();
        let result = runtime.execute_pending_commands();
        assert!(result
            .expect_err("no executor")
            .contains("No command executor available"));
        assert!(runtime.add_tui_sender(mpsc::unbounded_channel().0).is_err());
    }

    #[test]
    fn test_run_update_cycle_routes_commands() {
        let config = Config::defaults().expect("embedded config parses");
        let mut runtime = Runtime::new_with_executor(AppState::new_with_config(config, 20.0));
        let (fs_tx, mut fs_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::channel(1);
        runtime.add_fullscreen_sender(fs_tx).expect("executor");
        runtime.add_render_request_sender(render_tx).expect("executor");

        runtime.send_msg(Msg::Ui(UiMsg::ToggleFullscreen));
        runtime.send_msg(Msg::Ui(UiMsg::ToggleInfo));
        let failed = runtime.run_update_cycle().expect("cycle runs");

        assert_eq!(failed, 0);
        assert_eq!(fs_rx.try_recv().ok(), Some(FullscreenCommand::Enter));
        assert!(render_rx.try_recv().is_ok());
    }

    #[test]
    fn test_run_update_cycle_counts_failures() {
        let config = Config::defaults().expect("embedded config parses");
        let mut runtime = Runtime::new_with_executor(AppState::new_with_config(config, 20.0));
        let (fs_tx, fs_rx) = mpsc::unbounded_channel();
        runtime.add_fullscreen_sender(fs_tx).expect("executor");
        drop(fs_rx);

        runtime.send_msg(Msg::Ui(UiMsg::ToggleFullscreen));
        assert_eq!(runtime.run_update_cycle(), Ok(1));
        assert_eq!(runtime.get_stats().queued_commands, 0);
    }

    #[test]
    fn test_execute_pending_commands_empty() {
        let mut runtime = Runtime::new_with_executor(AppState::default());
        let result = runtime.execute_pending_commands();
        assert_eq!(result, Ok(0));
    }
}
