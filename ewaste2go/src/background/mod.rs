use crate::events::DataEvent;
use ewaste_data::PickupId;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};

pub const TRACKING_TASK: &str = "tracking_ticker";
pub const QR_SCAN_TASK: &str = "qr_scan";

/// Manages the app's timers
/// Tracks running tasks by id and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_task<F>(&mut self, task_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel(task_id);
        tracing::debug!("Starting background task {}", task_id);
        let handle = tokio::spawn(future);
        self.tasks.insert(task_id.to_string(), handle);
    }

    pub fn cancel(&mut self, task_id: &str) {
        if let Some(handle) = self.tasks.remove(task_id) {
            tracing::debug!("Cancelling background task {}", task_id);
            handle.abort();
        }
    }

    pub fn is_running(&self, task_id: &str) -> bool {
        self.tasks
            .get(task_id)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Builds the timer futures; their output goes back to the event loop as
/// data events
#[derive(Clone)]
pub struct Timers {
    tx: UnboundedSender<DataEvent>,
    tracking_interval: Duration,
    qr_scan_delay: Duration,
}

impl Timers {
    pub fn new(
        tx: UnboundedSender<DataEvent>,
        tracking_interval: Duration,
        qr_scan_delay: Duration,
    ) -> Self {
        Self {
            tx,
            tracking_interval,
            qr_scan_delay,
        }
    }

    /// Repeating tick for the tracked pickup; the first tick comes one
    /// period after start. Ends once the receiver is gone.
    pub fn tracking_ticker(&self, pickup_id: PickupId) -> impl Future<Output = ()> + Send + 'static {
        let tx = self.tx.clone();
        let period = self.tracking_interval;
        async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let event = DataEvent::TrackingTick {
                    pickup_id: pickup_id.clone(),
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        }
    }

    /// One-shot simulated camera scan
    pub fn qr_scan(&self) -> impl Future<Output = ()> + Send + 'static {
        let tx = self.tx.clone();
        let delay = self.qr_scan_delay;
        async move {
            sleep(delay).await;
            let _ = tx.send(DataEvent::QrScanCompleted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn timers() -> (Timers, mpsc::UnboundedReceiver<DataEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timers = Timers::new(tx, Duration::from_millis(2000), Duration::from_millis(3000));
        (timers, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_emits_every_period() {
        let (timers, mut rx) = timers();
        let mut manager = BackgroundTaskManager::new();
        manager.spawn_task(TRACKING_TASK, timers.tracking_ticker("pk1".into()));

        for _ in 0..2 {
            assert_eq!(
                rx.recv().await,
                Some(DataEvent::TrackingTick {
                    pickup_id: "pk1".into()
                })
            );
        }
        assert!(manager.is_running(TRACKING_TASK));
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_a_task_aborts_the_old_one() {
        let (timers, mut rx) = timers();
        let mut manager = BackgroundTaskManager::new();
        manager.spawn_task(TRACKING_TASK, timers.tracking_ticker("old".into()));
        manager.spawn_task(TRACKING_TASK, timers.tracking_ticker("new".into()));

        assert_eq!(
            rx.recv().await,
            Some(DataEvent::TrackingTick {
                pickup_id: "new".into()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn qr_scan_fires_once_after_delay() {
        let (timers, mut rx) = timers();
        let mut manager = BackgroundTaskManager::new();
        let started = Instant::now();
        manager.spawn_task(QR_SCAN_TASK, timers.qr_scan());

        assert_eq!(rx.recv().await, Some(DataEvent::QrScanCompleted));
        assert!(started.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_task() {
        let (timers, mut rx) = timers();
        let mut manager = BackgroundTaskManager::new();
        manager.spawn_task(QR_SCAN_TASK, timers.qr_scan());
        manager.cancel(QR_SCAN_TASK);
        assert!(!manager.is_running(QR_SCAN_TASK));

        drop(timers);
        // every sender is gone once the aborted task is dropped
        assert_eq!(rx.recv().await, None);
    }
}
