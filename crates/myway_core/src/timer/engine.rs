//! Countdown state machine over the key-value store.
//!
//! # Responsibility
//! - Drive the pomodoro lifecycle: start, tick, stop, reset, resume.
//! - Persist every transition immediately so a process restart can
//!   reconstruct the countdown exactly.
//!
//! # Invariants
//! - While running, `pomo_endTime` holds the absolute end instant and
//!   remaining time is recomputed from it on every tick.
//! - While idle, `pomo_remaining` holds the frozen countdown and
//!   `pomo_endTime` is absent.
//! - Expiry fires the host notification exactly once: the running flag is
//!   cleared before the callback, so a re-entrant tick sees an idle timer.

use log::{debug, info, warn};

use super::clock::Clock;
use super::{TimerPhase, TimerResult, TimerSnapshot, WORK_TIME_SECS};
use crate::store::KeyValueStore;

const END_TIME_KEY: &str = "pomo_endTime";
const IS_RUNNING_KEY: &str = "pomo_isRunning";
const REMAINING_KEY: &str = "pomo_remaining";

/// Side effects the engine delegates to its embedder.
///
/// The engine never sleeps or spawns; it asks the host to schedule the
/// next tick and reports expiry through `times_up`.
pub trait TimerHost {
    /// A running countdown wants another `tick` soon.
    fn request_frame(&self);

    /// No further ticks are needed until the next transition.
    fn cancel_frame(&self);

    /// The countdown just reached zero.
    fn times_up(&self);
}

/// Host that ignores scheduling and expiry, for embedders that poll.
impl TimerHost for () {
    fn request_frame(&self) {}
    fn cancel_frame(&self) {}
    fn times_up(&self) {}
}

impl<H: TimerHost + ?Sized> TimerHost for &H {
    fn request_frame(&self) {
        (**self).request_frame()
    }

    fn cancel_frame(&self) {
        (**self).cancel_frame()
    }

    fn times_up(&self) {
        (**self).times_up()
    }
}

/// Persistence-synchronized countdown engine.
///
/// Holds no countdown state of its own; the store is the single source
/// of truth and every operation reads it afresh.
pub struct PomodoroEngine<'s, S: KeyValueStore, C: Clock, H: TimerHost> {
    store: &'s S,
    clock: C,
    host: H,
}

impl<'s, S: KeyValueStore, C: Clock, H: TimerHost> PomodoroEngine<'s, S, C, H> {
    pub fn new(store: &'s S, clock: C, host: H) -> Self {
        Self { store, clock, host }
    }

    /// Starts the countdown from the persisted remaining time.
    ///
    /// Absent remaining time defaults to a full session; a persisted `0`
    /// stays `0`, so starting a fully elapsed session expires on the
    /// first tick. Starting a running timer is a no-op.
    pub fn start(&self) -> TimerResult<TimerSnapshot> {
        if self.is_running()? {
            debug!("event=timer_start module=timer status=noop reason=already_running");
            return self.observe();
        }

        let remaining = self.read_idle_remaining()?;
        let end = self.clock.now_ms().saturating_add(remaining * 1_000);
        self.store.set(END_TIME_KEY, &end.to_string())?;
        self.store.set(IS_RUNNING_KEY, "true")?;
        info!("event=timer_start module=timer status=ok remaining_s={remaining}");
        self.tick()
    }

    /// Advances a running countdown by one observation of the clock.
    ///
    /// Recomputes remaining time from the persisted end instant, asks the
    /// host for another frame while time is left, and finalizes expiry
    /// when it reaches zero. Idle timers are returned unchanged.
    pub fn tick(&self) -> TimerResult<TimerSnapshot> {
        if !self.is_running()? {
            return self.observe();
        }

        let Some(end) = self.read_end_timestamp()? else {
            // Running flag without a readable end instant: the state is
            // unreconstructable, so degrade to a fresh idle session.
            warn!("event=timer_tick module=timer status=degraded reason=missing_end_time");
            self.store.remove(END_TIME_KEY)?;
            self.store.set(IS_RUNNING_KEY, "false")?;
            self.store.set(REMAINING_KEY, &WORK_TIME_SECS.to_string())?;
            self.host.cancel_frame();
            return Ok(TimerSnapshot {
                phase: TimerPhase::Idle,
                remaining_seconds: WORK_TIME_SECS,
                end_timestamp_ms: None,
            });
        };

        let remaining = remaining_at(end, self.clock.now_ms());
        if remaining <= 0 {
            self.store.set(REMAINING_KEY, "0")?;
            self.store.remove(END_TIME_KEY)?;
            self.store.set(IS_RUNNING_KEY, "false")?;
            self.host.cancel_frame();
            self.host.times_up();
            info!("event=timer_expire module=timer status=ok");
            return Ok(TimerSnapshot {
                phase: TimerPhase::Idle,
                remaining_seconds: 0,
                end_timestamp_ms: None,
            });
        }

        self.host.request_frame();
        Ok(TimerSnapshot {
            phase: TimerPhase::Running,
            remaining_seconds: remaining,
            end_timestamp_ms: Some(end),
        })
    }

    /// Pauses the countdown, freezing the remaining time in the store.
    ///
    /// When the end instant is unreadable the previously frozen value is
    /// left untouched. Stopping an idle timer is a no-op.
    pub fn stop(&self) -> TimerResult<TimerSnapshot> {
        if !self.is_running()? {
            return self.observe();
        }

        match self.read_end_timestamp()? {
            Some(end) => {
                let remaining = remaining_at(end, self.clock.now_ms());
                self.store.set(REMAINING_KEY, &remaining.to_string())?;
                debug!("event=timer_stop module=timer status=ok remaining_s={remaining}");
            }
            None => {
                warn!("event=timer_stop module=timer status=degraded reason=missing_end_time");
            }
        }

        self.store.remove(END_TIME_KEY)?;
        self.store.set(IS_RUNNING_KEY, "false")?;
        self.host.cancel_frame();
        self.observe()
    }

    /// Stops the countdown and restores a full session.
    pub fn reset(&self) -> TimerResult<TimerSnapshot> {
        self.stop()?;
        self.store.set(REMAINING_KEY, &WORK_TIME_SECS.to_string())?;
        info!("event=timer_reset module=timer status=ok");
        self.observe()
    }

    /// Reattaches to whatever state the store holds after a restart.
    ///
    /// A persisted running timer resumes ticking against its original end
    /// instant, including immediate expiry when that instant has already
    /// passed. Idle state is just observed.
    pub fn resume(&self) -> TimerResult<TimerSnapshot> {
        if self.is_running()? {
            self.tick()
        } else {
            self.observe()
        }
    }

    /// Reads the current state without modifying it.
    fn observe(&self) -> TimerResult<TimerSnapshot> {
        if self.is_running()? {
            if let Some(end) = self.read_end_timestamp()? {
                return Ok(TimerSnapshot {
                    phase: TimerPhase::Running,
                    remaining_seconds: remaining_at(end, self.clock.now_ms()),
                    end_timestamp_ms: Some(end),
                });
            }
        }

        Ok(TimerSnapshot {
            phase: TimerPhase::Idle,
            remaining_seconds: self.read_idle_remaining()?,
            end_timestamp_ms: None,
        })
    }

    fn is_running(&self) -> TimerResult<bool> {
        Ok(self.store.get(IS_RUNNING_KEY)?.as_deref() == Some("true"))
    }

    fn read_end_timestamp(&self) -> TimerResult<Option<i64>> {
        Ok(self
            .store
            .get(END_TIME_KEY)?
            .and_then(|raw| raw.trim().parse::<i64>().ok()))
    }

    /// Frozen remaining seconds. Missing or unreadable values default to a
    /// full session; parsed values clamp into `0..=WORK_TIME_SECS`, the
    /// only range legitimate writes produce.
    fn read_idle_remaining(&self) -> TimerResult<i64> {
        let remaining = match self.store.get(REMAINING_KEY)? {
            None => WORK_TIME_SECS,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(value) => value.clamp(0, WORK_TIME_SECS),
                Err(_) => {
                    warn!("event=timer_read module=timer status=degraded key={REMAINING_KEY}");
                    WORK_TIME_SECS
                }
            },
        };
        Ok(remaining)
    }
}

/// Whole seconds between `now_ms` and `end_ms`, rounded up, floored at
/// zero; saturates instead of wrapping on extreme persisted instants.
fn remaining_at(end_ms: i64, now_ms: i64) -> i64 {
    let delta = end_ms.saturating_sub(now_ms);
    if delta <= 0 {
        0
    } else {
        delta.saturating_add(999) / 1_000
    }
}
