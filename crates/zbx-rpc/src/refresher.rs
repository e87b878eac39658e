//! Background bearer-credential refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use zbx_core::{ConfigError, Result};

use crate::config::ErrorCallback;
use crate::session::Session;

/// Safety margin between refresh interval and bearer lifetime: credentials
/// are renewed at least this long before they can expire.
pub const REFRESH_MARGIN: Duration = Duration::from_secs(5 * 60);

/// The background task that periodically re-authenticates.
///
/// Lifecycle: stopped → running (`start`) → stopped (`stop`), restartable.
/// A failed tick is reported through the error callback and the loop keeps
/// ticking; only `stop` ends it.
pub(crate) struct TokenRefresher {
    state: Mutex<Option<RunningRefresher>>,
}

struct RunningRefresher {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TokenRefresher {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Spawn the refresh loop. Fails when already running.
    pub(crate) async fn start(
        &self,
        session: Arc<Session>,
        period: Duration,
        on_error: Option<ErrorCallback>,
    ) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.is_some() {
            return Err(ConfigError::RefresherRunning.into());
        }

        let (shutdown, mut signal) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // A fresh interval yields immediately; consume that tick so the
            // first refresh happens one full period after start.
            ticker.tick().await;

            info!("token refresher started");
            loop {
                tokio::select! {
                    biased;
                    _ = signal.changed() => {
                        info!("token refresher stopped");
                        return;
                    }
                    _ = ticker.tick() => {
                        debug!("refreshing bearer credential");
                        match session.authenticate().await {
                            Ok(()) => debug!("bearer credential refreshed"),
                            Err(err) => {
                                warn!(error = %err, "bearer credential refresh failed");
                                if let Some(callback) = &on_error {
                                    callback(err);
                                }
                            }
                        }
                    }
                }
            }
        });

        *state = Some(RunningRefresher { shutdown, task });
        Ok(())
    }

    /// Stop the task and wait for it to exit.
    ///
    /// No refresh can fire after this returns, even if a tick was mid-flight
    /// when the signal was sent. A no-op when already stopped.
    pub(crate) async fn stop(&self) {
        let running = self.state.lock().await.take();
        if let Some(running) = running {
            let _ = running.shutdown.send(true);
            let _ = running.task.await;
        }
    }
}

impl Drop for TokenRefresher {
    fn drop(&mut self) {
        // Drop can't await the task; the signal alone ends the loop.
        if let Ok(mut state) = self.state.try_lock() {
            if let Some(running) = state.take() {
                let _ = running.shutdown.send(true);
            }
        }
    }
}
