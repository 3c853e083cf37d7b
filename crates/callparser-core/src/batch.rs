// crates/callparser-core/src/batch.rs

//! # Batch Lookups
//!
//! Fans independent lookups out over a worker pool. Each worker keeps its own
//! result list; lists are joined at the end, so there is no shared
//! accumulator on the hot path.
//!
//! **Ordering:** hits of one call stay together and keep their order, but
//! calls may come back in any order. Correlate through [`Hit::call`].
//!
//! **Cancellation:** cooperative, checked between two lookups.

use crate::index::PrefixIndex;
use crate::lookup::{lookup_one, Hit};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Executor settings for [`lookup_many_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Worker threads. `None` uses the available parallelism (4 if unknown).
    pub workers: Option<usize>,
    /// Calls handed to a worker per queue message.
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            workers: None,
            chunk_size: 256,
        }
    }
}

impl BatchConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers.max(1));
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }
}

/// Cooperative cancellation flag shared between a caller and a running batch.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Resolve many call signs with the default [`BatchConfig`].
pub fn lookup_many(calls: &[String], index: &PrefixIndex) -> Vec<Hit> {
    lookup_many_with(calls, index, &BatchConfig::default(), &CancelToken::new())
}

/// Resolve many call signs on an explicit executor configuration.
///
/// Stops handing out work once `cancel` is set; hits already produced are
/// returned.
pub fn lookup_many_with(
    calls: &[String],
    index: &PrefixIndex,
    config: &BatchConfig,
    cancel: &CancelToken,
) -> Vec<Hit> {
    #[cfg(feature = "parallel")]
    {
        let workers = config.worker_count();
        if workers > 1 && calls.len() > config.chunk_size {
            return parallel::run(calls, index, config.chunk_size.max(1), workers, cancel);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    sequential(calls, index, cancel)
}

fn sequential(calls: &[String], index: &PrefixIndex, cancel: &CancelToken) -> Vec<Hit> {
    let mut hits = Vec::with_capacity(calls.len());
    for (done, call) in calls.iter().enumerate() {
        if cancel.is_cancelled() {
            info!("batch cancelled after {done} of {} calls", calls.len());
            break;
        }
        hits.extend(lookup_one(call, index));
    }
    hits
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::CancelToken;
    use crate::index::PrefixIndex;
    use crate::lookup::{lookup_one, Hit};
    use crossbeam_channel::unbounded;
    use log::{debug, info, warn};
    use std::thread;

    pub(super) fn run(
        calls: &[String],
        index: &PrefixIndex,
        chunk_size: usize,
        workers: usize,
        cancel: &CancelToken,
    ) -> Vec<Hit> {
        // Receivers are clonable: every worker pulls from the same queue
        let (sender, receiver) = unbounded::<&[String]>();
        for chunk in calls.chunks(chunk_size) {
            if sender.send(chunk).is_err() {
                break;
            }
        }
        drop(sender);

        debug!(
            "batch: {} calls, {} workers, chunks of {}",
            calls.len(),
            workers,
            chunk_size
        );

        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let receiver = receiver.clone();
                    scope.spawn(move || {
                        let mut local = Vec::new();
                        while let Ok(chunk) = receiver.recv() {
                            for call in chunk {
                                if cancel.is_cancelled() {
                                    return local;
                                }
                                local.extend(lookup_one(call, index));
                            }
                        }
                        local
                    })
                })
                .collect();

            let mut hits = Vec::with_capacity(calls.len());
            for handle in handles {
                match handle.join() {
                    Ok(local) => hits.extend(local),
                    Err(_) => warn!("batch worker panicked, its results are lost"),
                }
            }
            if cancel.is_cancelled() {
                info!("batch cancelled, {} hits collected", hits.len());
            }
            hits
        })
    }
}
