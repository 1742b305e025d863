use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use sim_logging::{sim_debug, sim_error, sim_info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{EventSink, SchedulerError, SchedulerEvent, TimerId};

enum SchedulerCommand {
    Schedule { timer_id: TimerId, delay: Duration },
    Cancel { timer_id: TimerId },
    Shutdown,
}

/// One-shot timers on a background tokio runtime.
///
/// Each timer fires at most once, through the sink, unless it is cancelled
/// first. Scheduling an id that is still pending replaces the earlier timer.
pub struct SchedulerHandle {
    cmd_tx: mpsc::UnboundedSender<SchedulerCommand>,
    worker: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    pub fn new(sink: Arc<dyn EventSink>) -> Result<Self, SchedulerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("autoreply-timer")
            .enable_time()
            .build()
            .map_err(|err| SchedulerError::Runtime(err.to_string()))?;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let worker = thread::Builder::new()
            .name("autoreply-scheduler".to_string())
            .spawn(move || {
                runtime.block_on(run_scheduler(cmd_rx, sink));
            })
            .map_err(|err| SchedulerError::Runtime(err.to_string()))?;

        sim_info!("Scheduler started");
        Ok(Self {
            cmd_tx,
            worker: Some(worker),
        })
    }

    pub fn schedule(&self, timer_id: TimerId, delay: Duration) -> Result<(), SchedulerError> {
        self.send(SchedulerCommand::Schedule { timer_id, delay })
    }

    /// Cancelling an unknown or already fired timer is not an error.
    pub fn cancel(&self, timer_id: TimerId) -> Result<(), SchedulerError> {
        self.send(SchedulerCommand::Cancel { timer_id })
    }

    /// Cancels every pending timer and waits for the runtime thread to exit.
    pub fn shutdown(&mut self) {
        let _ = self.cmd_tx.send(SchedulerCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                sim_error!("Scheduler thread panicked");
            }
        }
    }

    fn send(&self, command: SchedulerCommand) -> Result<(), SchedulerError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| SchedulerError::Closed)
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(SchedulerCommand::Shutdown);
    }
}

async fn run_scheduler(
    mut cmd_rx: mpsc::UnboundedReceiver<SchedulerCommand>,
    sink: Arc<dyn EventSink>,
) {
    let root = CancellationToken::new();
    // Generation tells a finished timer apart from a newer one reusing its id.
    let mut timers: HashMap<TimerId, (u64, CancellationToken)> = HashMap::new();
    let mut generation: u64 = 0;
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(TimerId, u64)>();

    loop {
        tokio::select! {
            command = cmd_rx.recv() => match command {
                Some(SchedulerCommand::Schedule { timer_id, delay }) => {
                    generation += 1;
                    let token = root.child_token();
                    if let Some((_, previous)) = timers.insert(timer_id, (generation, token.clone())) {
                        previous.cancel();
                        sim_debug!("Timer {} rescheduled", timer_id);
                    }
                    sim_debug!("Timer {} scheduled in {:?}", timer_id, delay);
                    tokio::spawn(run_timer(
                        timer_id,
                        generation,
                        delay,
                        token,
                        sink.clone(),
                        done_tx.clone(),
                    ));
                }
                Some(SchedulerCommand::Cancel { timer_id }) => {
                    if let Some((_, token)) = timers.remove(&timer_id) {
                        token.cancel();
                    }
                }
                Some(SchedulerCommand::Shutdown) | None => break,
            },
            Some((timer_id, finished)) = done_rx.recv() => {
                if timers.get(&timer_id).is_some_and(|(current, _)| *current == finished) {
                    timers.remove(&timer_id);
                }
            }
        }
    }

    root.cancel();
    sim_info!("Scheduler stopped; {} timer(s) dropped", timers.len());
}

async fn run_timer(
    timer_id: TimerId,
    generation: u64,
    delay: Duration,
    token: CancellationToken,
    sink: Arc<dyn EventSink>,
    done_tx: mpsc::UnboundedSender<(TimerId, u64)>,
) {
    tokio::select! {
        biased;
        () = token.cancelled() => {
            sim_debug!("Timer {} cancelled", timer_id);
        }
        () = tokio::time::sleep(delay) => {
            sim_debug!("Timer {} elapsed", timer_id);
            sink.emit(SchedulerEvent::Elapsed { timer_id });
        }
    }
    let _ = done_tx.send((timer_id, generation));
}
