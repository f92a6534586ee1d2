use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Set of named async locks
///
/// Used to serialise writes on a per-key basis where the storage layer
/// cannot enforce uniqueness itself.
#[derive(Clone, Default)]
pub struct KeyedLock {
    entries: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl KeyedLock {
    /// Take the lock for the given key, creating it if required
    ///
    /// Entries no longer held or waited on are evicted on the way in,
    /// keeping the map bounded by the number of in-flight keys.
    pub async fn acquire(&self, key: String) -> OwnedMutexGuard<()> {
        let entry = {
            let mut entries = self.entries.lock().await;

            // Holders and waiters both keep a clone of the Arc, so a
            // strong count of one means the map is the only owner left.
            entries.retain(|_, lock| Arc::strong_count(lock) > 1);

            entries.entry(key).or_default().clone()
        };

        entry.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::future::{select, Either};

    use super::KeyedLock;

    #[async_std::test]
    async fn lock_is_exclusive_per_key() {
        let locks = KeyedLock::default();
        let guard = locks.acquire("a".to_string()).await;

        // Another key is not blocked
        let _other = locks.acquire("b".to_string()).await;

        // The same key is blocked until the guard is dropped
        let contended = select(
            Box::pin(locks.acquire("a".to_string())),
            Box::pin(async_std::task::sleep(Duration::from_millis(50))),
        )
        .await;

        assert!(matches!(contended, Either::Right(..)));

        // Release the losing waiter first, otherwise the lock is
        // handed to a future that is never polled again.
        drop(contended);
        drop(guard);
        locks.acquire("a".to_string()).await;
    }

    #[async_std::test]
    async fn released_keys_are_evicted() {
        let locks = KeyedLock::default();

        for i in 0..100 {
            locks.acquire(format!("key_{i}")).await;
        }

        // The next acquire prunes every entry nobody holds
        let _guard = locks.acquire("last".to_string()).await;
        assert_eq!(locks.entries.lock().await.len(), 1);
    }
}
