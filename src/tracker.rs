use log::{debug, info};

use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

/// Monotonic time source for [`ElapsedTimeTracker`]
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time, so a test can keep a handle
/// while the tracker owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        ManualClock::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    Started,
    Resumed,
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub index: u32,
    /// Pause adjusted time since the previous checkpoint, or since start for the first one
    pub delta: Duration,
}

pub struct ElapsedTimeTracker<C = SystemClock> {
    clock: C,
    state: TimerState,
    start_time: Option<Instant>,
    pause_time: Option<Instant>,
    pause_offset: Duration,
    // Stored relative to start_time, already pause adjusted
    last_checkpoint: Duration,
    checkpoint_count: u32,
}

impl<C: Clock> ElapsedTimeTracker<C> {
    pub fn new(clock: C) -> ElapsedTimeTracker<C> {
        ElapsedTimeTracker {
            clock,
            state: TimerState::Idle,
            start_time: None,
            pause_time: None,
            pause_offset: Duration::ZERO,
            last_checkpoint: Duration::ZERO,
            checkpoint_count: 0,
        }
    }

    pub fn start(&mut self) -> Start {
        let now = self.clock.now();
        let ret = match self.state {
            TimerState::Running => return Start::AlreadyRunning,
            TimerState::Paused => {
                let pause_time = self.pause_time.take().unwrap_or(now);
                self.pause_offset += now.saturating_duration_since(pause_time);
                Start::Resumed
            }
            TimerState::Idle => {
                self.start_time = Some(now);
                self.last_checkpoint = Duration::ZERO;
                self.checkpoint_count = 0;
                self.pause_offset = Duration::ZERO;
                Start::Started
            }
        };

        self.state = TimerState::Running;
        debug!("Timer {:?}, pause offset {:?}", ret, self.pause_offset);
        ret
    }

    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        self.pause_time = Some(self.clock.now());
        self.state = TimerState::Paused;
        true
    }

    pub fn checkpoint(&mut self) -> Option<Checkpoint> {
        if self.state != TimerState::Running {
            return None;
        }

        let adjusted_now = self.elapsed_at(self.clock.now());
        let delta = adjusted_now.saturating_sub(self.last_checkpoint);
        self.last_checkpoint = adjusted_now;
        self.checkpoint_count += 1;

        Some(Checkpoint {
            index: self.checkpoint_count,
            delta,
        })
    }

    pub fn reset(&mut self) {
        if self.state != TimerState::Idle {
            info!("Timer reset after {} checkpoints", self.checkpoint_count);
        }

        self.state = TimerState::Idle;
        self.start_time = None;
        self.pause_time = None;
        self.pause_offset = Duration::ZERO;
        self.last_checkpoint = Duration::ZERO;
        self.checkpoint_count = 0;
    }

    /// Time spent running since the last fresh start. Frozen at the pause instant while paused.
    pub fn elapsed(&self) -> Duration {
        match self.state {
            TimerState::Idle => Duration::ZERO,
            TimerState::Running => self.elapsed_at(self.clock.now()),
            TimerState::Paused => {
                let pause_time = self.pause_time.unwrap_or_else(|| self.clock.now());
                self.elapsed_at(pause_time)
            }
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.start_time {
            Some(start_time) => now
                .saturating_duration_since(start_time)
                .saturating_sub(self.pause_offset),
            None => Duration::ZERO,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    pub fn checkpoint_count(&self) -> u32 {
        self.checkpoint_count
    }

    pub fn pause_offset(&self) -> Duration {
        self.pause_offset
    }
}

impl Default for ElapsedTimeTracker<SystemClock> {
    fn default() -> Self {
        ElapsedTimeTracker::new(SystemClock)
    }
}
