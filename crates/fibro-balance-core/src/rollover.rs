//! Recurring day-rollover check.
//!
//! The spoon budget does not watch the clock itself. This task calls
//! [`Session::tick`] once per interval, so a budget stays stale for at most
//! one interval after midnight. The task belongs to whoever spawned it and
//! stops on [`RolloverTask::cancel`] or when the handle is dropped.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::events::Event;
use crate::session::Session;

/// Default polling interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Handle to a running rollover task.
pub struct RolloverTask {
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RolloverTask {
    /// Start checking for a new day every `every`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(session: Arc<Mutex<Session>>, every: Duration) -> Self {
        Self::start(session, every, None)
    }

    /// Like [`spawn`](Self::spawn), also forwarding rollover events.
    pub fn spawn_with_events(
        session: Arc<Mutex<Session>>,
        every: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::start(session, every, Some(tx)), rx)
    }

    fn start(
        session: Arc<Mutex<Session>>,
        every: Duration,
        events: Option<mpsc::UnboundedSender<Event>>,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let every = every.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick fires immediately
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        debug!("rollover task stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        let event = match session.lock() {
                            Ok(mut session) => session.tick(),
                            Err(_) => {
                                warn!("session lock poisoned, stopping rollover task");
                                break;
                            }
                        };
                        if let (Some(event), Some(tx)) = (event, events.as_ref()) {
                            let _ = tx.send(event);
                        }
                    }
                }
            }
        });

        Self {
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Stop the task and wait for it to finish.
    pub async fn cancel(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RolloverTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryGateway;
    use chrono::NaiveDate;

    fn session_at(clock: &FixedClock) -> Arc<Mutex<Session>> {
        Arc::new(Mutex::new(Session::start(
            Box::new(MemoryGateway::new()),
            Arc::new(clock.clone()),
        )))
    }

    #[tokio::test(start_paused = true)]
    async fn rolls_over_within_one_interval() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let session = session_at(&clock);
        session.lock().unwrap().consume_spoons(5);

        let (task, mut events) = RolloverTask::spawn_with_events(session.clone(), DEFAULT_POLL_INTERVAL);

        clock.advance_day();
        tokio::time::sleep(Duration::from_secs(61)).await;

        let event = events.recv().await.unwrap();
        assert!(matches!(event, Event::BudgetRolledOver { total: 10, .. }));
        {
            let session = session.lock().unwrap();
            assert_eq!(session.budget().used(), 0);
            assert_eq!(session.budget().date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        }

        task.cancel().await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_stops_ticking() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let session = session_at(&clock);
        session.lock().unwrap().consume_spoons(2);

        let task = RolloverTask::spawn(session.clone(), Duration::from_secs(60));
        task.cancel().await;

        clock.advance_day();
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(session.lock().unwrap().budget().used(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_aborts_task() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let session = session_at(&clock);

        let task = RolloverTask::spawn(session.clone(), Duration::from_secs(60));
        drop(task);
        tokio::task::yield_now().await;
        // only the test's own handle is left once the aborted task is gone
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(Arc::strong_count(&session), 1);
    }
}
