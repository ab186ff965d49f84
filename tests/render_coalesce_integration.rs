use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use belfry::{
    infrastructure::{
        config::Config,
        fullscreen::FakeFullscreenHost,
        time_source::FixedClock,
        tui::{event_source::EventSource, test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
    test_helpers::local_time,
};

/// A runner whose clock is sampled once, so only terminal events cause frames
async fn quiet_runner() -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
    let mut config = Config::defaults()?;
    config.clock.sample_interval_ms = 3_600_000;
    let mut runner = AppRunner::new(
        config,
        tui.clone(),
        EventSource::real(tui.clone()),
        Arc::new(FixedClock::new(local_time(12, 0, 0, 0))),
        Box::new(FakeFullscreenHost::new()),
        20.0,
    )?;
    runner.start().await?;
    while runner.state().clock.sample().is_none() {
        runner.run_one_cycle().await?;
    }
    Ok((runner, tui))
}

async fn draws_for(
    runner: &mut AppRunner,
    tui: &Arc<Mutex<TestTui>>,
    event: Event,
) -> Result<usize> {
    let before = tui.lock().await.draw_count();
    tui.lock().await.enqueue_event(event);
    runner.run_one_cycle().await?;
    Ok(tui.lock().await.draw_count() - before)
}

#[tokio::test]
async fn test_one_frame_per_cycle() -> Result<()> {
    let (mut runner, tui) = quiet_runner().await?;

    assert_eq!(draws_for(&mut runner, &tui, Event::Render).await?, 1);
    assert_eq!(draws_for(&mut runner, &tui, Event::Resize(90, 30)).await?, 1);
    assert_eq!(
        draws_for(
            &mut runner,
            &tui,
            Event::Key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE))
        )
        .await?,
        1
    );
    Ok(())
}

#[tokio::test]
async fn test_idle_events_do_not_draw() -> Result<()> {
    let (mut runner, tui) = quiet_runner().await?;

    assert_eq!(draws_for(&mut runner, &tui, Event::FocusGained).await?, 0);
    // nothing is animating, so a tick changes nothing
    assert_eq!(draws_for(&mut runner, &tui, Event::Tick).await?, 0);
    assert_eq!(
        draws_for(
            &mut runner,
            &tui,
            Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
        )
        .await?,
        0
    );
    Ok(())
}

#[tokio::test]
async fn test_ticks_draw_while_the_overlay_moves() -> Result<()> {
    let (mut runner, tui) = quiet_runner().await?;
    draws_for(
        &mut runner,
        &tui,
        Event::Key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE)),
    )
    .await?;

    assert_eq!(draws_for(&mut runner, &tui, Event::Tick).await?, 1);
    Ok(())
}
