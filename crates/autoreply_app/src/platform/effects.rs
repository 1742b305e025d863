use std::ops::ControlFlow;
use std::sync::{mpsc, Arc};

use autoreply_core::{Effect, Msg};
use autoreply_engine::{EventSink, SchedulerError, SchedulerEvent, SchedulerHandle};
use chrono::Utc;
use sim_logging::{sim_info, sim_warn};

/// Turns fired timers into `Msg::TimerElapsed`, stamped with the firing time.
struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: SchedulerEvent) {
        match event {
            SchedulerEvent::Elapsed { timer_id } => {
                let _ = self.msg_tx.send(Msg::TimerElapsed {
                    timer_id,
                    at: Utc::now(),
                });
            }
        }
    }
}

pub struct EffectRunner {
    scheduler: SchedulerHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Result<Self, SchedulerError> {
        let scheduler = SchedulerHandle::new(Arc::new(MsgSink { msg_tx }))?;
        Ok(Self { scheduler })
    }

    /// Executes effects in order. Breaks once an `Exit` has been seen.
    pub fn enqueue(&self, effects: Vec<Effect>) -> ControlFlow<()> {
        let mut flow = ControlFlow::Continue(());
        for effect in effects {
            match effect {
                Effect::ScheduleTimer { timer_id, delay } => {
                    sim_info!("ScheduleTimer timer_id={} delay={:?}", timer_id, delay);
                    if let Err(err) = self.scheduler.schedule(timer_id, delay) {
                        sim_warn!("Could not schedule timer {}: {}", timer_id, err);
                    }
                }
                Effect::CancelTimer { timer_id } => {
                    sim_info!("CancelTimer timer_id={}", timer_id);
                    if let Err(err) = self.scheduler.cancel(timer_id) {
                        sim_warn!("Could not cancel timer {}: {}", timer_id, err);
                    }
                }
                Effect::Exit => {
                    flow = ControlFlow::Break(());
                }
            }
        }
        flow
    }

    pub fn shutdown(&mut self) {
        self.scheduler.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn sink_turns_elapsed_into_timer_msg() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let sink = MsgSink { msg_tx };

        sink.emit(SchedulerEvent::Elapsed { timer_id: 7 });

        match msg_rx.try_recv() {
            Ok(Msg::TimerElapsed { timer_id, .. }) => assert_eq!(timer_id, 7),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn scheduled_timer_comes_back_as_msg() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut runner = EffectRunner::new(msg_tx).unwrap();

        let flow = runner.enqueue(vec![Effect::ScheduleTimer {
            timer_id: 1,
            delay: Duration::from_millis(10),
        }]);
        assert_eq!(flow, ControlFlow::Continue(()));

        match msg_rx.recv_timeout(Duration::from_secs(2)) {
            Ok(Msg::TimerElapsed { timer_id, .. }) => assert_eq!(timer_id, 1),
            other => panic!("unexpected message: {other:?}"),
        }
        runner.shutdown();
    }

    #[test]
    fn exit_breaks_after_cancelling() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut runner = EffectRunner::new(msg_tx).unwrap();

        runner.enqueue(vec![Effect::ScheduleTimer {
            timer_id: 2,
            delay: Duration::from_millis(50),
        }]);
        let flow = runner.enqueue(vec![Effect::CancelTimer { timer_id: 2 }, Effect::Exit]);
        assert_eq!(flow, ControlFlow::Break(()));

        assert!(msg_rx.recv_timeout(Duration::from_millis(300)).is_err());
        runner.shutdown();
    }
}
