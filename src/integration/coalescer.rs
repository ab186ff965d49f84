use tokio::sync::mpsc;

/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Drain every queued render request, returning how many there were
    pub fn drain_render_requests(rx: &mut mpsc::Receiver<()>) -> usize {
        let mut count = 0;
        while rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    /// Whether to draw this loop: on any queued request or the frame-rate signal
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_render_event: bool) -> bool {
        queued_render_reqs > 0 || saw_render_event
    }

    /// Only the last of several resizes in one loop matters
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}
