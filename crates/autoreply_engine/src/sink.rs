use std::sync::mpsc;

use crate::SchedulerEvent;

/// Receives scheduler events on the scheduler's runtime thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: SchedulerEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<SchedulerEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<SchedulerEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: SchedulerEvent) {
        let _ = self.tx.send(event);
    }
}
