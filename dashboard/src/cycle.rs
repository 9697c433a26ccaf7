use crate::metrics::{CYCLE_SECONDS, TICKS_TOTAL, WINDOW_LEN};
use crate::model::DashboardView;
use crate::view;
use crate::window::RollingWindow;
use chrono::Local;
use rand::Rng;
use simulator::synthesize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// One firing of the periodic timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub seq: u64,
    /// Local wall-clock time, HH:MM:SS
    pub label: String,
}

impl Tick {
    pub fn now(seq: u64) -> Self {
        Self {
            seq,
            label: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Owns the rolling window and the random source. Each call to
/// [`UpdateCycle::run_cycle`] synthesizes, records and derives in one step,
/// so ownership alone keeps cycles from overlapping.
pub struct UpdateCycle<R> {
    window: RollingWindow,
    rng: R,
    last_tick: u64,
}

impl<R: Rng> UpdateCycle<R> {
    pub fn new(rng: R) -> Self {
        Self {
            window: RollingWindow::new(),
            rng,
            last_tick: 0,
        }
    }

    pub fn run_cycle(&mut self, tick: Tick) -> DashboardView {
        let reading = synthesize(&mut self.rng);
        self.window.record(tick.label, reading);
        self.last_tick = tick.seq;
        view::derive(&self.window, self.last_tick)
    }

    /// View of the current state without advancing it
    pub fn view(&self) -> DashboardView {
        view::derive(&self.window, self.last_tick)
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }
}

/// Drives `cycle` from a periodic timer and publishes every view.
///
/// Ticks that fall due while a cycle is still running are skipped. Returns
/// once every receiver of `tx` has been dropped.
pub async fn run_ticker<R: Rng>(
    mut cycle: UpdateCycle<R>,
    period: Duration,
    tx: watch::Sender<Arc<DashboardView>>,
) {
    info!("Starting update cycle with tick period {:?}", period);

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut seq = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tx.closed() => break,
        }

        seq += 1;
        let first = cycle.window().is_empty();
        let start = Instant::now();
        let view = cycle.run_cycle(Tick::now(seq));
        let elapsed = start.elapsed();

        if first {
            info!("First sample recorded");
        }

        TICKS_TOTAL.inc();
        WINDOW_LEN.set(cycle.window().len() as f64);
        CYCLE_SECONDS.observe(elapsed.as_secs_f64());

        if let Some(latest) = cycle.window().latest() {
            debug!(
                "Tick {} at {}: temperature={} humidity={} co2={} hydrogen={}",
                seq,
                latest.label,
                latest.reading.temperature,
                latest.reading.humidity,
                latest.reading.co2,
                latest.reading.hydrogen
            );
        }
        if elapsed > period {
            warn!("Cycle took {:?}, longer than tick period {:?}", elapsed, period);
        }

        if tx.send(Arc::new(view)).is_err() {
            break;
        }
    }

    info!("Update cycle stopped after {} ticks", seq);
}
