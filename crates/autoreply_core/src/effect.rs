use std::time::Duration;

use crate::TimerId;

/// Side effects requested by `update`; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire `Msg::TimerElapsed { timer_id, .. }` once `delay` has passed.
    ScheduleTimer { timer_id: TimerId, delay: Duration },
    /// Drop a previously scheduled timer; it must never fire.
    CancelTimer { timer_id: TimerId },
    /// Leave the event loop.
    Exit,
}
