//! [`TickSource`] implementations.
//!
//! [`MinuteTicker`] follows the local wall clock: one tick right away, then
//! one each time the minute changes.  [`FixedTicks`] replays a fixed list,
//! which is what `--once` and `--at` use.

use crate::clock::Tick;
use crate::traits::TickSource;
use chrono::{Local, NaiveTime, Timelike};
use log::{debug, info};
use std::convert::Infallible;
use std::fmt;
use std::sync::mpsc;
use std::time::Duration;

/// Time left until the next minute boundary after `now`.
///
/// Never zero, so a loop sleeping on it cannot spin.
pub fn until_next_minute(now: &impl Timelike) -> Duration {
    // Leap seconds report nanoseconds above one second.
    let nanos = now.nanosecond().min(999_999_999);
    let elapsed = Duration::from_secs(now.second().into()) + Duration::from_nanos(nanos.into());
    Duration::from_secs(60)
        .saturating_sub(elapsed)
        .max(Duration::from_millis(1))
}

/// A [`TickSource`] driven by the local wall clock.
pub struct MinuteTicker {
    now: Box<dyn FnMut() -> NaiveTime + Send>,
    max_sleep: Duration,
    last: Option<Tick>,
}

impl MinuteTicker {
    pub fn new() -> Self {
        Self::with_clock(|| Local::now().time(), Duration::from_secs(60))
    }

    /// Tick from `now` instead of the local clock, sleeping at most
    /// `max_sleep` between readings.
    pub fn with_clock(now: impl FnMut() -> NaiveTime + Send + 'static, max_sleep: Duration) -> Self {
        Self {
            now: Box::new(now),
            max_sleep: max_sleep.max(Duration::from_millis(1)),
            last: None,
        }
    }
}

impl Default for MinuteTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MinuteTicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinuteTicker")
            .field("max_sleep", &self.max_sleep)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl TickSource for MinuteTicker {
    type Error = Infallible;

    /// Tick until the receiving end hangs up.
    ///
    /// This method **blocks**.  Run it on a dedicated thread.  A closed
    /// sink is noticed at the next minute change.
    fn run(&mut self, sink: mpsc::Sender<Tick>) -> Result<(), Infallible> {
        loop {
            let now = (self.now)();
            let tick = Tick::from_time(&now);
            // Waking a little early would repeat the previous minute.
            if self.last != Some(tick) {
                debug!("tick {:02}:{:02}", tick.hour, tick.minute);
                if sink.send(tick).is_err() {
                    info!("sink closed, shutting down");
                    return Ok(());
                }
                self.last = Some(tick);
            }
            std::thread::sleep(until_next_minute(&now).min(self.max_sleep));
        }
    }
}

/// A [`TickSource`] that sends a fixed list of ticks and stops.
#[derive(Debug, Clone)]
pub struct FixedTicks {
    ticks: Vec<Tick>,
}

impl FixedTicks {
    pub fn new(ticks: impl IntoIterator<Item = Tick>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
        }
    }

    /// A single tick with the current local time.
    pub fn now() -> Self {
        Self::new([Tick::from_time(&Local::now())])
    }
}

impl TickSource for FixedTicks {
    type Error = Infallible;

    fn run(&mut self, sink: mpsc::Sender<Tick>) -> Result<(), Infallible> {
        for tick in self.ticks.drain(..) {
            if sink.send(tick).is_err() {
                break;
            }
        }
        Ok(())
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn full_minute_waits_sixty_seconds() {
        let t = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        assert_eq!(until_next_minute(&t), Duration::from_secs(60));
    }

    #[test]
    fn mid_minute_waits_remainder() {
        let t = NaiveTime::from_hms_milli_opt(10, 0, 59, 500).unwrap();
        assert_eq!(until_next_minute(&t), Duration::from_millis(500));
    }

    #[test]
    fn leap_second_never_zero() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert!(until_next_minute(&t) > Duration::ZERO);
    }

    /// A clock stuck at `10:MM:30`, where the test sets `MM`.
    fn manual_clock(minute: &Arc<AtomicU32>) -> impl FnMut() -> NaiveTime + Send + 'static {
        let minute = Arc::clone(minute);
        move || NaiveTime::from_hms_opt(10, minute.load(Ordering::SeqCst), 30).unwrap()
    }

    #[test]
    fn minute_ticker_sends_each_minute_once() {
        let minute = Arc::new(AtomicU32::new(0));
        let mut ticker = MinuteTicker::with_clock(manual_clock(&minute), Duration::from_millis(1));
        let (tx, rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = done_tx.send(ticker.run(tx));
        });

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Tick { hour: 10, minute: 0 }));
        // Many readings of the same minute, one tick.
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

        minute.store(1, Ordering::SeqCst);
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Tick { hour: 10, minute: 1 }));

        // The ticker notices the hang-up at the next minute and returns.
        drop(rx);
        minute.store(2, Ordering::SeqCst);
        let result = done_rx.recv_timeout(Duration::from_secs(5)).expect("ticker thread finished");
        assert!(result.is_ok());
    }

    #[test]
    fn sleep_capped_by_max_sleep() {
        let ticker = MinuteTicker::with_clock(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap(), Duration::ZERO);
        assert_eq!(ticker.max_sleep, Duration::from_millis(1));
    }

    #[test]
    fn minute_ticker_stops_when_sink_closed() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        assert!(MinuteTicker::new().run(tx).is_ok());
    }

    #[test]
    fn fixed_ticks_replay_in_order() {
        let mut src = FixedTicks::new([Tick { hour: 0, minute: 0 }, Tick { hour: 23, minute: 59 }]);
        let (tx, rx) = mpsc::channel();
        src.run(tx).unwrap();
        let ticks: Vec<Tick> = rx.try_iter().collect();
        assert_eq!(ticks, vec![Tick { hour: 0, minute: 0 }, Tick { hour: 23, minute: 59 }]);
    }
}
