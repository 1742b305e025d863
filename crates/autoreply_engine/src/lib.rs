//! Auto-reply engine: timer scheduling for deferred simulator events.
mod scheduler;
mod sink;
mod types;

pub use scheduler::SchedulerHandle;
pub use sink::{ChannelEventSink, EventSink};
pub use types::{SchedulerError, SchedulerEvent, TimerId};
