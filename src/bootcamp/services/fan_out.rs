use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Default number of simultaneous in-flight calls per fan-out
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Default bound on each individual remote call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// What to do when a single call fails or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole fan-out with the first failure
    Propagate,
    /// Treat the id as absent and keep going
    Suppress,
}

#[derive(Debug, Error)]
pub enum FanOutError {
    #[error("call for id {id} timed out after {timeout:?}")]
    Timeout { id: i64, timeout: Duration },

    #[error("call for id {id} failed: {source}")]
    Call {
        id: i64,
        #[source]
        source: anyhow::Error,
    },
}

/// Bounded-concurrency dispatcher of one remote call per id.
///
/// Ids are deduplicated before dispatch. At most `concurrency` calls are in
/// flight at once and each one is bounded by `call_timeout`; excess ids wait
/// behind the limit. Results arrive in completion order, not input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOut {
    concurrency: usize,
    call_timeout: Duration,
}

impl Default for FanOut {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

impl FanOut {
    pub fn new(concurrency: usize, call_timeout: Duration) -> Self {
        Self {
            concurrency: concurrency.max(1),
            call_timeout,
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Runs `call` once per distinct id.
    ///
    /// `call` resolves to `Ok(Some(_))` when the entity exists, `Ok(None)` when
    /// the remote side answered that it does not, and `Err(_)` on any failure.
    /// Absent ids are omitted from the output under both policies. Under
    /// [`FailurePolicy::Propagate`] the first failure or timeout is returned and
    /// the remaining in-flight calls are dropped; under
    /// [`FailurePolicy::Suppress`] this never returns `Err`.
    pub async fn run<T, F, Fut>(
        &self,
        ids: &[i64],
        policy: FailurePolicy,
        call: F,
    ) -> Result<Vec<(i64, T)>, FanOutError>
    where
        F: Fn(i64) -> Fut,
        Fut: Future<Output = anyhow::Result<Option<T>>>,
    {
        let unique = distinct(ids);
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let call_timeout = self.call_timeout;
        let mut in_flight = stream::iter(unique)
            .map(|id| {
                let pending = call(id);
                async move { (id, tokio::time::timeout(call_timeout, pending).await) }
            })
            .buffer_unordered(self.concurrency);

        let mut found = Vec::new();
        while let Some((id, outcome)) = in_flight.next().await {
            let failure = match outcome {
                Ok(Ok(Some(entity))) => {
                    found.push((id, entity));
                    continue;
                }
                Ok(Ok(None)) => {
                    tracing::debug!(id, "remote lookup reported id as absent");
                    continue;
                }
                Ok(Err(source)) => FanOutError::Call { id, source },
                Err(_) => FanOutError::Timeout {
                    id,
                    timeout: call_timeout,
                },
            };

            match policy {
                FailurePolicy::Propagate => return Err(failure),
                FailurePolicy::Suppress => {
                    tracing::warn!(error = %failure, "dropping id from fan-out result");
                }
            }
        }

        Ok(found)
    }
}

/// Deduplicates ids. The resulting order is unspecified.
fn distinct(ids: &[i64]) -> Vec<i64> {
    ids.iter().copied().collect::<HashSet<_>>().into_iter().collect()
}
