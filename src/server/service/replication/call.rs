use std::{future::Future, time::Duration};

use crate::server::error::replication::RemoteError;

/// How remote calls of a run are issued.
///
/// Calls are always awaited one at a time. After each call the policy sleeps for
/// `pacing` to stay under Discord's per-route limits, and a rate-limited call is
/// retried up to `max_retries` times after the delay Discord asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallPolicy {
    pub pacing: Duration,
    pub max_retries: u32,
}

impl CallPolicy {
    pub fn new(pacing: Duration, max_retries: u32) -> Self {
        Self {
            pacing,
            max_retries,
        }
    }

    /// Back-to-back calls without pacing or retries.
    pub fn sequential() -> Self {
        Self::new(Duration::ZERO, 0)
    }

    /// Runs one remote call under this policy.
    ///
    /// `call` is invoked again for each retry, so it must build a fresh future from
    /// owned or copied inputs every time.
    ///
    /// # Arguments
    /// - `call` - Factory producing the remote call future
    ///
    /// # Returns
    /// - `Ok(T)` - The call succeeded, possibly after retries
    /// - `Err(RemoteError)` - The call failed, or stayed rate limited after all retries
    pub async fn run<T, F, Fut>(&self, mut call: F) -> Result<T, RemoteError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        let mut attempt = 0;

        let result = loop {
            match call().await {
                Err(RemoteError::RateLimited { retry_after }) if attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Rate limited by Discord, retrying in {:?} (attempt {}/{})",
                        retry_after,
                        attempt,
                        self.max_retries
                    );
                    tokio::time::sleep(retry_after).await;
                }
                result => break result,
            }
        };

        if !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }

        result
    }
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self::sequential()
    }
}
