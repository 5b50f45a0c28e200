//! Play/pause state machine and the auto-run timer.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Proof that an automatic advance was granted. Hand it back with
/// [`RunControl::complete`] once the advance has finished.
#[must_use]
#[derive(Debug)]
pub struct Tick(());

/// Fires automatic advances at a fixed interval while running.
///
/// At most one advance is outstanding: while a [`Tick`] is held, `poll`
/// grants nothing. Leftover time carries into the next interval, but a
/// long frame still grants a single advance and drops the whole-interval backlog.
#[derive(Clone, Debug)]
pub struct RunControl {
    state: RunState,
    interval: Duration,
    elapsed: Duration,
    in_flight: bool,
}

impl RunControl {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: RunState::Paused,
            interval,
            elapsed: Duration::ZERO,
            in_flight: false,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Paused -> Running starts the timer, Running -> Paused cancels it
    pub fn toggle(&mut self) {
        self.state = match self.state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        self.elapsed = Duration::ZERO;
        log::debug!("run state -> {:?}", self.state);
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            log::debug!("run state -> Paused");
        }
        self.state = RunState::Paused;
        self.elapsed = Duration::ZERO;
    }

    /// Account for `dt` of wall time and grant an advance if one is due
    pub fn poll(&mut self, dt: Duration) -> Option<Tick> {
        if !self.is_running() || self.in_flight {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed = match self.interval.as_nanos() {
            0 => Duration::ZERO,
            n => Duration::from_nanos((self.elapsed.as_nanos() % n) as u64),
        };
        self.in_flight = true;
        Some(Tick(()))
    }

    /// Release the guard taken by `poll`
    pub fn complete(&mut self, _tick: Tick) {
        self.in_flight = false;
    }
}
