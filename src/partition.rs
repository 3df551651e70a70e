//! Partition-keyed mutual exclusion
//!
//! The job space partitions cleanly by (company, role_family): resolution
//! for different partitions never interferes, but two concurrent
//! read-decide-write sequences in the same partition could both see no match
//! and create duplicate jobs. This registry hands out one lock per partition
//! key, lazily, and runs the whole sequence under it. Because the lock is
//! taken before the candidate read, whoever waited on it re-reads candidates
//! after the winner's write by construction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::IngestError;

#[derive(Default)]
pub struct PartitionLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl PartitionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, key: &str) -> Arc<Mutex<()>> {
        let mut map = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Run one read-decide-write sequence exclusively within a partition. A
    /// poisoned lock means a previous holder panicked mid-sequence; the
    /// caller must re-run the whole page, not re-apply a stale decision.
    pub fn with_partition<T>(
        &self,
        key: &str,
        f: impl FnOnce() -> Result<T, IngestError>,
    ) -> Result<T, IngestError> {
        let lock = self.lock_for(key);
        let _guard = lock
            .lock()
            .map_err(|_| IngestError::PartitionContention(key.to_string()))?;
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_same_partition_serializes() {
        let locks = Arc::new(PartitionLocks::new());
        let in_flight = Arc::new(AtomicUsize::new(0));
        let seen_overlap = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let locks = locks.clone();
                let in_flight = in_flight.clone();
                let seen_overlap = seen_overlap.clone();
                thread::spawn(move || {
                    locks
                        .with_partition("acme|software engineer", || {
                            if in_flight.fetch_add(1, Ordering::SeqCst) > 0 {
                                seen_overlap.fetch_add(1, Ordering::SeqCst);
                            }
                            thread::yield_now();
                            in_flight.fetch_sub(1, Ordering::SeqCst);
                            Ok(())
                        })
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(seen_overlap.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_different_partitions_are_independent() {
        let locks = PartitionLocks::new();
        locks
            .with_partition("acme|engineer", || {
                // A held lock on one partition does not block another
                locks.with_partition("globex|engineer", || Ok(()))
            })
            .unwrap();
    }

    #[test]
    fn test_poisoned_partition_surfaces_contention() {
        let locks = Arc::new(PartitionLocks::new());
        let inner = locks.clone();
        let poisoner = thread::spawn(move || {
            let _ = inner.with_partition("acme|engineer", || -> Result<(), IngestError> {
                panic!("holder dies mid-sequence");
            });
        });
        assert!(poisoner.join().is_err());

        let err = locks
            .with_partition("acme|engineer", || Ok(()))
            .unwrap_err();
        assert!(matches!(err, IngestError::PartitionContention(_)));

        // Other partitions are unaffected
        assert!(locks.with_partition("globex|engineer", || Ok(())).is_ok());
    }
}
