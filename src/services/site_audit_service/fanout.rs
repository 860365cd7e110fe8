use crate::models::Config;
use log::warn;
use std::future::Future;
use std::time::Duration;
use tokio::time::{error::Elapsed, timeout_at, Instant};

/// Bounds each probe by its own timeout and every probe of one request by a
/// single shared deadline.
#[derive(Debug, Clone, Copy)]
pub struct FanOut {
    pub probe_timeout: Duration,
    pub deadline: Instant,
}

impl FanOut {
    /// Starts the request clock now.
    pub fn new(probe_timeout: Duration, request_deadline: Duration) -> Self {
        Self {
            probe_timeout,
            deadline: Instant::now() + request_deadline,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.probe_timeout, config.request_deadline)
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    fn cutoff(&self) -> Instant {
        (Instant::now() + self.probe_timeout).min(self.deadline)
    }

    /// Runs `work` until the probe timeout or the request deadline, whichever
    /// comes first.
    pub async fn bounded<T, F>(&self, work: F) -> Result<T, Elapsed>
    where
        F: Future<Output = T>,
    {
        timeout_at(self.cutoff(), work).await
    }

    /// Runs one probe under `bounded`. Errors and timeouts are logged and
    /// replaced by `default`, so callers never see a failure.
    pub async fn probe<T, F>(&self, name: &str, probe: F, default: T) -> T
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match self.bounded(probe).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!("probe {} failed: {:#}", name, e);
                default
            }
            Err(_) => {
                warn!("probe {} cut off by its timeout or the request deadline", name);
                default
            }
        }
    }

    /// Like `probe`, for lookups whose absence is a valid outcome.
    pub async fn optional<T, F>(&self, name: &str, probe: F) -> Option<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        self.probe(name, async { probe.await.map(Some) }, None).await
    }
}
