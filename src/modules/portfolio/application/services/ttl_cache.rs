use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// A single value with a time-to-live.
///
/// The lock is held across the load, so concurrent callers that find the
/// entry stale wait for one load instead of each hitting the store.
/// Failed loads are not cached.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<Entry<T>>>,
}

impl<T> TtlCache<T>
where
    T: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if entry.stored_at.elapsed() < self.ttl {
                return Ok(entry.value.clone());
            }
        }

        let value = load().await?;
        *slot = Some(Entry {
            value: value.clone(),
            stored_at: Instant::now(),
        });
        Ok(value)
    }

    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    pub async fn is_fresh(&self) -> bool {
        matches!(
            self.slot.lock().await.as_ref(),
            Some(entry) if entry.stored_at.elapsed() < self.ttl
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn second_read_within_ttl_is_served_from_cache() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let value: Result<u32, ()> = cache
                .get_or_load(|| async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await;
            assert_eq!(value, Ok(7));
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_reloaded() {
        let cache = TtlCache::new(Duration::from_millis(0));
        let loads = AtomicUsize::new(0);

        for _ in 0..2 {
            let _: Result<u32, ()> = cache
                .get_or_load(|| async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(1)
                })
                .await;
        }

        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = TtlCache::new(Duration::from_secs(60));

        let first: Result<u32, &str> = cache.get_or_load(|| async { Err("down") }).await;
        assert_eq!(first, Err("down"));
        assert!(!cache.is_fresh().await);

        let second: Result<u32, &str> = cache.get_or_load(|| async { Ok(3) }).await;
        assert_eq!(second, Ok(3));
        assert!(cache.is_fresh().await);
    }

    #[tokio::test]
    async fn invalidate_forces_a_reload() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let _: Result<&str, ()> = cache.get_or_load(|| async { Ok("old") }).await;

        cache.invalidate().await;

        let value: Result<&str, ()> = cache.get_or_load(|| async { Ok("new") }).await;
        assert_eq!(value, Ok("new"));
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_load() {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
        let loads = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let loads = loads.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_load(|| async {
                        loads.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok::<_, ()>(42)
                    })
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), Ok(42));
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }
}
