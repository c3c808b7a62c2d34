use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

/// Semaphore-bounded task spawner. At most `limit` tasks run at once; the
/// spawning loop itself waits for a permit so pending work is not buffered.
pub struct BoundedExecutor {
    semaphore: Arc<Semaphore>,
    completed: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
}

impl BoundedExecutor {
    pub fn new(limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(limit.clamp(1, Semaphore::MAX_PERMITS))),
            completed: Arc::new(AtomicUsize::new(0)),
            failed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Run `task_fn` over every input and wait for all of them. Output order is
    /// completion order, not input order.
    pub async fn run_all<T, F, Fut>(&self, inputs: impl IntoIterator<Item = T>, task_fn: F) -> Vec<Fut::Output>
    where
        T: Send + 'static,
        F: Fn(T) -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
    {
        let mut handles = FuturesUnordered::new();

        for input in inputs {
            let permit = match self.semaphore.clone().acquire_owned().await {
                Ok(p) => p,
                Err(_) => {
                    tracing::error!("executor semaphore closed, dropping remaining tasks");
                    break;
                }
            };
            let fut = task_fn(input);
            let completed = self.completed.clone();

            handles.push(tokio::spawn(async move {
                let out = fut.await;
                completed.fetch_add(1, Ordering::Relaxed);
                drop(permit);
                out
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        while let Some(joined) = handles.next().await {
            match joined {
                Ok(out) => results.push(out),
                Err(e) => {
                    self.failed.fetch_add(1, Ordering::Relaxed);
                    tracing::error!(error = %e, "probe task failed");
                }
            }
        }
        results
    }

    /// (completed, failed)
    pub fn get_stats(&self) -> (usize, usize) {
        (
            self.completed.load(Ordering::Relaxed),
            self.failed.load(Ordering::Relaxed),
        )
    }
}
