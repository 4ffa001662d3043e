//! The animation controller: owns the cycle position, the live options,
//! and the timer task that advances and renders on every tick.
//!
//! The timer is a self-rescheduling chain rather than a fixed-rate
//! interval: each tick sleeps for the configured speed, advances the
//! cycle, renders, and only then arms the next tick. Inter-tick spacing is
//! therefore `speed` plus render time, and a patched `speed` takes effect
//! as soon as the next tick is armed.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::indicator::cycle::DotCycle;
use crate::indicator::options::{Directive, DotsOptions, OptionsPatch};
use crate::sink::TextSink;

/// State shared between the controller and its timer task.
#[derive(Debug)]
struct Shared {
    options: DotsOptions,
    cycle: DotCycle,
}

/// Drives one repeating dots animation against one sink.
///
/// Exactly one timer task exists per controller at any time: `start` always
/// cancels the previous task before spawning a new one, and `stop` cancels
/// it and clears the sink. The cycle position survives stop/start, so a
/// restarted indicator resumes mid-cycle rather than from the first frame.
///
/// Spawning the timer requires an active Tokio runtime; constructing with
/// `options.start == true` outside one panics.
pub struct DotsController {
    shared: Arc<Mutex<Shared>>,
    sink: Arc<dyn TextSink>,
    ticker: Option<JoinHandle<()>>,
}

impl DotsController {
    /// Create a controller bound to `sink`. Begins animating immediately
    /// when `options.start` is set. Dropping the returned controller
    /// cancels its timer, so hold on to it for as long as the animation
    /// should run.
    #[must_use]
    pub fn new(sink: Arc<dyn TextSink>, options: DotsOptions) -> Self {
        let mut controller = Self {
            shared: Arc::new(Mutex::new(Shared {
                options,
                cycle: DotCycle::new(),
            })),
            sink,
            ticker: None,
        };
        if options.start {
            controller.start();
        }
        controller
    }

    /// Begin ticking. A previously scheduled ticker is always cancelled
    /// first, so calling this twice never leaves two timers racing on one
    /// sink. The first frame appears one tick interval after the call.
    pub fn start(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }

        let shared = Arc::clone(&self.shared);
        let sink = Arc::clone(&self.sink);

        self.ticker = Some(tokio::spawn(async move {
            loop {
                let speed = lock(&shared).options.speed;
                tokio::time::sleep(Duration::from_millis(speed)).await;

                let frame = {
                    let mut state = lock(&shared);
                    let DotsOptions { glyph, count, .. } = state.options;
                    state.cycle.advance(count);
                    state.cycle.frame(glyph)
                };
                sink.set_text(&frame);
            }
        }));
    }

    /// Cancel the pending tick and clear the rendered output. A no-op when
    /// not running: the sink is left untouched and the cycle position is
    /// never reset.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            self.sink.set_text("");
        }
    }

    /// Route a control directive: `Stop` and `Start` map onto [`Self::stop`]
    /// and [`Self::start`]; `Patch` merges into the live options without
    /// touching the running state or the cycle position.
    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Stop => self.stop(),
            Directive::Start => self.start(),
            Directive::Patch(patch) => self.patch(patch),
        }
    }

    /// Merge a patch into the live options. Glyph and count changes show up
    /// on the next rendered frame; a speed change applies once the next
    /// tick is armed.
    pub fn patch(&mut self, patch: OptionsPatch) {
        lock(&self.shared).options.apply(patch);
    }

    /// Whether a timer is currently scheduled.
    #[must_use]
    pub const fn running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Current cycle position.
    #[must_use]
    pub fn count(&self) -> u32 {
        lock(&self.shared).cycle.count()
    }

    /// Snapshot of the live options.
    #[must_use]
    pub fn options(&self) -> DotsOptions {
        lock(&self.shared).options
    }
}

impl Drop for DotsController {
    fn drop(&mut self) {
        // A dropped controller must not leave a detached ticker writing to
        // the sink. The sink text is left as-is; only stop() clears it.
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().expect("indicator state lock poisoned")
}
