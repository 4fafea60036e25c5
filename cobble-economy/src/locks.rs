use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = HashMap<u64, Arc<Mutex<()>>>;

/// One async mutex per user, so concurrent gateway events for the same user
/// are applied one at a time.
///
/// Entries only live while someone holds or waits on them. The map itself is
/// behind a std mutex because it is never held across an await and has to be
/// reachable from `Drop`.
#[derive(Clone, Debug, Default)]
pub struct UserLocks {
    inner: Arc<StdMutex<LockMap>>,
}

/// Held for the duration of one user's critical section.
#[derive(Debug)]
pub struct UserLockGuard {
    guard: Option<OwnedMutexGuard<()>>,
    lock: Arc<Mutex<()>>,
    user_id: u64,
    map: Arc<StdMutex<LockMap>>,
}

impl UserLocks {
    pub async fn acquire(&self, user_id: u64) -> UserLockGuard {
        let lock = {
            let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(user_id).or_default())
        };

        let guard = Arc::clone(&lock).lock_owned().await;

        UserLockGuard {
            guard: Some(guard),
            lock,
            user_id,
            map: Arc::clone(&self.inner),
        }
    }

    #[cfg(test)]
    fn tracked_users(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Drop for UserLockGuard {
    fn drop(&mut self) {
        self.guard.take();

        // Waiters clone the entry under the map lock, so two references
        // (the map's and ours) means nobody else is queued.
        let mut locks = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        if Arc::strong_count(&self.lock) == 2 {
            locks.remove(&self.user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::UserLocks;

    #[tokio::test]
    async fn same_user_waits_for_the_holder() {
        let locks = UserLocks::default();
        let guard = locks.acquire(1).await;

        let blocked = tokio::time::timeout(Duration::from_millis(20), locks.acquire(1)).await;
        assert!(blocked.is_err());

        drop(guard);
        let acquired = tokio::time::timeout(Duration::from_millis(200), locks.acquire(1)).await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn different_users_do_not_contend() {
        let locks = UserLocks::default();
        let _first = locks.acquire(1).await;

        let other = tokio::time::timeout(Duration::from_millis(200), locks.acquire(2)).await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn released_entries_are_pruned() {
        let locks = UserLocks::default();

        for user_id in 0..100 {
            let _guard = locks.acquire(user_id).await;
        }
        assert_eq!(locks.tracked_users(), 0);

        let held = locks.acquire(7).await;
        assert_eq!(locks.tracked_users(), 1);
        drop(held);
        assert_eq!(locks.tracked_users(), 0);
    }

    #[tokio::test]
    async fn queued_waiter_keeps_the_entry_exclusive() {
        let locks = UserLocks::default();
        let first = locks.acquire(1).await;

        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(1).await;
                tokio::time::sleep(Duration::from_millis(100)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(first);
        assert_eq!(locks.tracked_users(), 1);
        tokio::time::sleep(Duration::from_millis(10)).await;

        let blocked = tokio::time::timeout(Duration::from_millis(20), locks.acquire(1)).await;
        assert!(blocked.is_err());

        waiter.await.unwrap();
        assert_eq!(locks.tracked_users(), 0);
    }
}
