//! Delayed-job scheduling used by sessions for turn timeouts and AI think time.
//!
//! Sessions never sleep or spawn on their own; they hand a job to a
//! [`Scheduler`] and keep the returned [`ScheduledTask`] so the job can be
//! cancelled under the session lock. [`TokioScheduler`] runs jobs on a tokio
//! runtime. [`ManualScheduler`] is a virtual clock driven explicitly by tests.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::trace;

use crate::error::AppError;

/// A unit of deferred work.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Run `job` once after `delay`, unless the returned task is cancelled first.
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask;
}

type Canceller = Box<dyn FnOnce() + Send>;

/// Handle to a scheduled job.
///
/// Dropping the handle does not cancel the job.
pub struct ScheduledTask {
    canceller: Mutex<Option<Canceller>>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            canceller: Mutex::new(Some(Box::new(cancel))),
        }
    }

    /// A handle with nothing to cancel.
    pub fn detached() -> Self {
        Self {
            canceller: Mutex::new(None),
        }
    }

    /// Prevent the job from running. Safe to call more than once; a job that
    /// has already started is not interrupted.
    pub fn cancel(&self) {
        if let Some(cancel) = self.canceller.lock().take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("armed", &self.canceller.lock().is_some())
            .finish()
    }
}

/// Schedules jobs as tokio tasks: `sleep(delay)` then the job.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Bind to the runtime of the calling context.
    pub fn current() -> Result<Self, AppError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| AppError::config(format!("no tokio runtime available: {e}")))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask {
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            job();
        });
        let abort = handle.abort_handle();
        ScheduledTask::new(move || abort.abort())
    }
}

struct PendingJob {
    id: u64,
    due: Duration,
    job: Job,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    jobs: Vec<PendingJob>,
}

impl ManualClock {
    /// Earliest job due at or before `until`; ties go to the oldest.
    fn take_due(&mut self, until: Duration) -> Option<PendingJob> {
        let idx = self
            .jobs
            .iter()
            .enumerate()
            .filter(|(_, j)| j.due <= until)
            .min_by_key(|(_, j)| (j.due, j.id))
            .map(|(i, _)| i)?;
        Some(self.jobs.remove(idx))
    }
}

/// Virtual-time scheduler for deterministic tests.
///
/// Nothing runs until [`advance`](Self::advance) is called. Jobs scheduled
/// by other jobs during an advance run in the same call if they fall due
/// within the advanced window.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of jobs still waiting to run.
    pub fn pending(&self) -> usize {
        self.clock.lock().jobs.len()
    }

    /// Delay until the next job falls due, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        let clock = self.clock.lock();
        clock
            .jobs
            .iter()
            .map(|j| j.due)
            .min()
            .map(|due| due.saturating_sub(clock.now))
    }

    /// Move the clock forward, running every job that falls due in deadline
    /// order. Returns how many jobs ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.lock().now + by;
        let mut ran = 0;
        loop {
            // Lock released before the job runs; jobs may schedule more work.
            let next = {
                let mut clock = self.clock.lock();
                let next = clock.take_due(target);
                if let Some(job) = &next {
                    clock.now = clock.now.max(job.due);
                }
                next
            };
            match next {
                Some(pending) => {
                    trace!(job_id = pending.id, due_ms = pending.due.as_millis() as u64, "Running manual job");
                    (pending.job)();
                    ran += 1;
                }
                None => break,
            }
        }
        self.clock.lock().now = target;
        ran
    }

    /// Advance straight to the next deadline and run what is due there.
    pub fn run_next(&self) -> usize {
        match self.next_due_in() {
            Some(delay) => self.advance(delay),
            None => 0,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask {
        let id = {
            let mut clock = self.clock.lock();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.jobs.push(PendingJob { id, due, job });
            id
        };
        let clock: Weak<Mutex<ManualClock>> = Arc::downgrade(&self.clock);
        ScheduledTask::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.lock().jobs.retain(|j| j.id != id);
            }
        })
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.jobs.len())
            .finish()
    }
}
