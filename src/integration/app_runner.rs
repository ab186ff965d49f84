use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::{FullscreenCommand, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        fullscreen::{FullscreenController, FullscreenHost, TerminalFullscreen},
        time_source::{Clock, SystemClock, TimeSampler},
        tui::{self, event_source::EventSource, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Capacity of the render request channel; one pending request is enough
const RENDER_REQUEST_CAPACITY: usize = 1;

/// Drives the Elm runtime: terminal events and clock samples in,
/// host effects and frames out.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    fullscreen: FullscreenController,
    clock: Arc<dyn Clock>,
    sample_interval: Duration,
    sampler: Option<TimeSampler>,
    // Messages produced outside the terminal (clock samples)
    host_tx: mpsc::UnboundedSender<RawMsg>,
    host_rx: mpsc::UnboundedReceiver<RawMsg>,
    fullscreen_rx: mpsc::UnboundedReceiver<FullscreenCommand>,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
}

impl AppRunner {
    /// Assemble a runner from its parts. Nothing is started until [`AppRunner::start`].
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        event_source: EventSource,
        clock: Arc<dyn Clock>,
        host: Box<dyn FullscreenHost>,
        tick_rate: f64,
    ) -> Result<Self> {
        let sample_interval = config.sample_interval();
        let initial_state = AppState::new_with_config(config, tick_rate);

        let mut runtime = Runtime::new_with_executor(initial_state);
        let (fullscreen_tx, fullscreen_rx) = mpsc::unbounded_channel();
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_req_tx, render_req_rx) = mpsc::channel(RENDER_REQUEST_CAPACITY);
        runtime
            .add_fullscreen_sender(fullscreen_tx)
            .map_err(color_eyre::eyre::Report::msg)?;
        runtime
            .add_tui_sender(tui_tx)
            .map_err(color_eyre::eyre::Report::msg)?;
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(color_eyre::eyre::Report::msg)?;

        let (host_tx, host_rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            tui,
            event_source,
            renderer: Renderer::new(),
            fullscreen: FullscreenController::new(host),
            clock,
            sample_interval,
            sampler: None,
            host_tx,
            host_rx,
            fullscreen_rx,
            tui_rx,
            render_req_rx,
        })
    }

    /// Runner for the user's terminal and wall clock
    pub fn new_with_real(
        config: Config,
        tui: Arc<Mutex<tui::real::RealTui>>,
        tick_rate: f64,
    ) -> Result<Self> {
        let host = TerminalFullscreen::new(tui::io(), config.fullscreen.escape_sequences);
        let tui: Arc<Mutex<dyn TuiLike + Send>> = tui;
        let event_source = EventSource::real(Arc::clone(&tui));
        Self::new(
            config,
            tui,
            event_source,
            Arc::new(SystemClock),
            Box::new(host),
            tick_rate,
        )
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Whether the fullscreen host currently reports fullscreen
    pub fn host_is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    pub fn is_sampling(&self) -> bool {
        self.sampler
            .as_ref()
            .is_some_and(|sampler| !sampler.is_finished())
    }

    /// Run until quit, then tear everything down.
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;

        let result = loop {
            match self.run_one_cycle().await {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        self.shutdown().await?;
        result
    }

    /// Enter the terminal, record its size and start sampling the clock
    pub async fn start(&mut self) -> Result<()> {
        let size = {
            let mut guard = self.tui.lock().await;
            guard.enter()?;
            guard.size()?
        };
        log::info!("Starting at {}x{}", size.width, size.height);

        // Baseline for the fullscreen host's resize tracking
        self.fullscreen.observe_resize(size.width, size.height);
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));

        self.sampler = Some(TimeSampler::spawn(
            Arc::clone(&self.clock),
            self.sample_interval,
            self.host_tx.clone(),
        ));

        self.process_update_cycle();
        self.apply_host_commands().await?;
        self.render().await
    }

    /// Wait for one event, update and render if needed.
    /// Returns `false` once the app should quit.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let mut saw_render = false;
        let mut resizes = Vec::new();

        let event = tokio::select! {
            biased;
            Some(raw) = self.host_rx.recv() => Err(raw),
            event = self.event_source.next() => Ok(event),
        };
        let event = match event {
            Err(raw) => {
                self.runtime.send_raw_msg(raw);
                None
            }
            Ok(None) => {
                // An exhausted or closed source would otherwise spin
                tokio::time::sleep(Duration::from_millis(1)).await;
                None
            }
            Ok(Some(event)) => Some(event),
        };
        // Catch up on everything else that is already waiting
        while let Ok(raw) = self.host_rx.try_recv() {
            self.runtime.send_raw_msg(raw);
        }

        if let Some(event) = event {
            self.handle_event(event, &mut saw_render, &mut resizes);
        }

        if let Some((width, height)) = Coalescer::decide_resize(None, &resizes) {
            self.runtime.send_raw_msg(RawMsg::Resize(width, height));
            if let Some(is_fullscreen) = self.fullscreen.observe_resize(width, height) {
                self.runtime
                    .send_raw_msg(RawMsg::FullscreenChanged(is_fullscreen));
            }
        }

        self.process_update_cycle();
        let resized = self.apply_host_commands().await?;

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
        }

        let queued = Coalescer::drain_render_requests(&mut self.render_req_rx);
        if Coalescer::decide_render(queued, saw_render || resized) {
            self.render().await?;
        }

        Ok(!self.runtime.state().system.should_quit)
    }

    /// Stop sampling, leave fullscreen and restore the terminal
    pub async fn shutdown(&mut self) -> Result<()> {
        if let Some(sampler) = self.sampler.take() {
            sampler.stop();
        }
        if !self.fullscreen.release() {
            log::warn!("Terminal may still be fullscreen");
        }
        self.tui.lock().await.exit()?;
        log::info!("Shut down: {:?}", self.runtime.get_stats());
        Ok(())
    }

    pub async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }

    fn handle_event(
        &mut self,
        event: tui::Event,
        saw_render: &mut bool,
        resizes: &mut Vec<(u16, u16)>,
    ) {
        match event {
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Render => *saw_render = true,
            tui::Event::Resize(w, h) => resizes.push((w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            tui::Event::Error => log::warn!("Terminal event stream reported an error"),
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_) => {}
        }
    }

    fn process_update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
        }
    }

    /// Execute queued host commands, feeding fullscreen outcomes back into
    /// the runtime. Returns whether the terminal was resized.
    async fn apply_host_commands(&mut self) -> Result<bool> {
        let mut resized = false;
        loop {
            let mut fed_back = false;

            while let Ok(TuiCommand::Resize { width, height }) = self.tui_rx.try_recv() {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                resized = true;
            }

            while let Ok(request) = self.fullscreen_rx.try_recv() {
                if let Some(is_fullscreen) = self.fullscreen.execute(request) {
                    self.runtime
                        .send_raw_msg(RawMsg::FullscreenChanged(is_fullscreen));
                    fed_back = true;
                }
            }

            if !fed_back {
                return Ok(resized);
            }
            self.process_update_cycle();
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        {
            let mut guard = self.tui.lock().await;
            guard.suspend()?;
            guard.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.process_update_cycle();
        Ok(())
    }
}
