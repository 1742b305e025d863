use thiserror::Error;

pub type TimerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// The timer's delay has passed and it was not cancelled.
    Elapsed { timer_id: TimerId },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("scheduler is not running")]
    Closed,
    #[error("failed to start scheduler runtime: {0}")]
    Runtime(String),
}
