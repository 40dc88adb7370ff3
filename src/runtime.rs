//! Bounded thread-pool runtime for batch record resolution.
//!
//! Record resolution shares no state across records, so a dump of many
//! records fans out one job per record with no locking. Workers drain a
//! bounded queue; each job resolves one owned record with its own fresh
//! mode cell and replies on a one-shot channel.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::delta::PartListDelta;
use crate::driver::resolve_record;
use crate::error::{ResolveError, ResolveResult};
use crate::record::BalanceRecord;

/// Pool configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Number of resolver workers.
    pub workers: usize,
    /// Maximum queued jobs.
    pub queue_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            queue_capacity: 1024,
        }
    }
}

enum Job {
    Resolve {
        record: BalanceRecord,
        reply: Sender<ResolveResult<PartListDelta>>,
    },

    #[cfg(test)]
    Sleep {
        duration: std::time::Duration,
        reply: Sender<()>,
    },
}

/// Handle returned by [`ResolverPool::submit`].
pub struct ResolveHandle {
    rx: Receiver<ResolveResult<PartListDelta>>,
}

impl ResolveHandle {
    /// Waits for the record's resolution to complete.
    ///
    /// # Errors
    ///
    /// The record's own [`ResolveError`], or
    /// [`ResolveError::Disconnected`] if the workers shut down before
    /// replying.
    pub fn join(self) -> ResolveResult<PartListDelta> {
        self.rx.recv().map_err(|_| ResolveError::Disconnected)?
    }
}

/// A fixed pool of resolver workers behind a bounded queue.
pub struct ResolverPool {
    tx: Sender<Job>,
    workers: Vec<JoinHandle<()>>,
    queue_capacity: usize,
}

impl ResolverPool {
    /// Starts the pool's worker threads.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        let workers = config.workers.max(1);
        let queue_capacity = config.queue_capacity.max(1);
        let (tx, rx) = bounded::<Job>(queue_capacity);

        let mut handles = Vec::with_capacity(workers);
        for idx in 0..workers {
            let rx: Receiver<Job> = rx.clone();
            let thread_name = format!("partdelta-resolver-{idx}");
            let handle = thread::Builder::new()
                .name(thread_name)
                .spawn(move || loop {
                    match rx.recv() {
                        Ok(Job::Resolve { record, reply }) => {
                            let result = resolve_record(&record);
                            let _ = reply.send(result);
                        }
                        Err(_) => break,

                        #[cfg(test)]
                        Ok(Job::Sleep { duration, reply }) => {
                            thread::sleep(duration);
                            let _ = reply.send(());
                        }
                    }
                })
                .expect("failed to spawn resolver worker");
            handles.push(handle);
        }

        Self {
            tx,
            workers: handles,
            queue_capacity,
        }
    }

    /// Submits one record for resolution without blocking.
    ///
    /// # Errors
    ///
    /// [`ResolveError::QueueFull`] when the queue is at capacity;
    /// [`ResolveError::Disconnected`] when the workers have shut down.
    pub fn submit(&self, record: BalanceRecord) -> ResolveResult<ResolveHandle> {
        let (reply, rx) = bounded::<ResolveResult<PartListDelta>>(1);
        match self.tx.try_send(Job::Resolve { record, reply }) {
            Ok(()) => Ok(ResolveHandle { rx }),
            Err(TrySendError::Full(_)) => Err(ResolveError::QueueFull {
                capacity: self.queue_capacity,
            }),
            Err(TrySendError::Disconnected(_)) => Err(ResolveError::Disconnected),
        }
    }

    #[cfg(test)]
    fn submit_sleep(&self, duration: std::time::Duration) -> ResolveResult<Receiver<()>> {
        let (reply, rx) = bounded::<()>(1);
        match self.tx.try_send(Job::Sleep { duration, reply }) {
            Ok(()) => Ok(rx),
            Err(TrySendError::Full(_)) => Err(ResolveError::QueueFull {
                capacity: self.queue_capacity,
            }),
            Err(TrySendError::Disconnected(_)) => Err(ResolveError::Disconnected),
        }
    }

    /// Resolves a batch of records, returning per-record results in input
    /// order.
    ///
    /// Submission blocks on a full queue rather than failing, so batches
    /// larger than the queue capacity are fine. Per-record failures land
    /// in the corresponding output element; the caller decides
    /// skip-versus-abort.
    #[must_use]
    pub fn resolve_batch(&self, records: Vec<BalanceRecord>) -> Vec<ResolveResult<PartListDelta>> {
        let handles: Vec<ResolveResult<ResolveHandle>> = records
            .into_iter()
            .map(|record| {
                let (reply, rx) = bounded::<ResolveResult<PartListDelta>>(1);
                self.tx
                    .send(Job::Resolve { record, reply })
                    .map(|()| ResolveHandle { rx })
                    .map_err(|_| ResolveError::Disconnected)
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.and_then(ResolveHandle::join))
            .collect()
    }
}

impl Drop for ResolverPool {
    fn drop(&mut self) {
        // Deterministic shutdown: close the channel so workers drain the
        // queue and exit, then join them.
        let (closed, _) = bounded::<Job>(1);
        drop(std::mem::replace(&mut self.tx, closed));
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}
