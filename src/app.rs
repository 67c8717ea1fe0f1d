use crate::{
    checkpoint_log::{CheckpointEntry, CheckpointLog},
    format::format_elapsed,
    tracker::{Clock, ElapsedTimeTracker, Start, SystemClock},
};

use log::{debug, info};

use std::{fmt, result::Result as StdResult, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRequest {
    Start,
    Pause,
    Checkpoint,
    Reset,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Started,
    Resumed,
    Paused,
    CheckpointRecorded(CheckpointEntry),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    AlreadyRunning,
    NotRunning,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::AlreadyRunning => write!(f, "timer is already running"),
            Rejected::NotRunning => write!(f, "timer is not running"),
        }
    }
}

impl std::error::Error for Rejected {}

pub struct App<C = SystemClock> {
    tracker: ElapsedTimeTracker<C>,
    log: CheckpointLog,
    display: String,
}

impl<C: Clock> App<C> {
    pub fn new(clock: C) -> App<C> {
        App {
            tracker: ElapsedTimeTracker::new(clock),
            log: CheckpointLog::default(),
            display: format_elapsed(Duration::ZERO),
        }
    }

    pub fn handle_request(&mut self, req: AppRequest) -> StdResult<AppEvent, Rejected> {
        let res = self.apply(req);
        match &res {
            Ok(AppEvent::CheckpointRecorded(entry)) => info!("{}", entry),
            Ok(event) => info!("{:?}", event),
            Err(e) => debug!("Ignoring {:?}: {}", req, e),
        }
        res
    }

    fn apply(&mut self, req: AppRequest) -> StdResult<AppEvent, Rejected> {
        let event = match req {
            AppRequest::Start => match self.tracker.start() {
                Start::Started => AppEvent::Started,
                Start::Resumed => AppEvent::Resumed,
                Start::AlreadyRunning => return Err(Rejected::AlreadyRunning),
            },
            AppRequest::Pause => {
                if !self.tracker.pause() {
                    return Err(Rejected::NotRunning);
                }
                AppEvent::Paused
            }
            AppRequest::Checkpoint => {
                let checkpoint = self.tracker.checkpoint().ok_or(Rejected::NotRunning)?;
                let entry = CheckpointEntry::new(checkpoint);
                self.log.push(entry.clone());
                AppEvent::CheckpointRecorded(entry)
            }
            AppRequest::Reset => {
                self.tracker.reset();
                self.log.clear();
                AppEvent::Reset
            }
        };

        // Always resync so a pause freezes the display at the pause instant
        self.display = format_elapsed(self.tracker.elapsed());
        Ok(event)
    }

    /// Recomputes the displayed time. Does nothing unless running, so the paused display stays
    /// frozen.
    pub fn refresh_display(&mut self) {
        if self.tracker.is_running() {
            self.display = format_elapsed(self.tracker.elapsed());
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn log(&self) -> &CheckpointLog {
        &self.log
    }

    pub fn tracker(&self) -> &ElapsedTimeTracker<C> {
        &self.tracker
    }

    pub fn is_running(&self) -> bool {
        self.tracker.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.tracker.is_paused()
    }
}

impl Default for App<SystemClock> {
    fn default() -> Self {
        App::new(SystemClock)
    }
}
