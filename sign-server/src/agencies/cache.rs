//! TTL cache in front of the agency provider.
//!
//! The cached list and its refresh time live in one immutable entry that is
//! swapped whole, so a reader never sees a list paired with the wrong
//! timestamp. The provider is called without holding the lock; two requests
//! racing past an expired TTL may both fetch, and the later refresh wins.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::Agency;

use super::clock::{Clock, SystemClock};
use super::provider::AgencyProvider;

/// Configuration for the agency cache.
#[derive(Debug, Clone)]
pub struct AgencyCacheConfig {
    /// How long a fetched list is served before refreshing.
    pub ttl: Duration,
}

impl AgencyCacheConfig {
    /// Create a config with the default TTL (24 hours).
    pub fn new() -> Self {
        Self {
            ttl: Duration::hours(24),
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for AgencyCacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A cached agency list and when it was fetched.
///
/// `last_refresh` is `None` until the first successful fetch, which makes an
/// empty cache always eligible for refresh.
#[derive(Debug, Clone, Default)]
pub struct AgencyCacheEntry {
    pub agencies: Arc<Vec<Agency>>,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl AgencyCacheEntry {
    pub fn new(agencies: Vec<Agency>, last_refresh: DateTime<Utc>) -> Self {
        Self {
            agencies: Arc::new(agencies),
            last_refresh: Some(last_refresh),
        }
    }

    /// Whether the entry may be served as-is at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.last_refresh
            .is_some_and(|refreshed| now - refreshed <= ttl)
    }
}

/// Agency list cache with stale-serve on provider failure.
///
/// Shared by reference (usually behind an `Arc`) between request handlers.
pub struct AgencyCache<P, C = SystemClock> {
    provider: P,
    clock: C,
    ttl: Duration,
    entry: RwLock<Arc<AgencyCacheEntry>>,
}

impl<P: AgencyProvider> AgencyCache<P> {
    /// Create an empty cache using the system clock.
    pub fn new(provider: P, config: &AgencyCacheConfig) -> Self {
        Self::with_clock(provider, SystemClock, config)
    }
}

impl<P: AgencyProvider, C: Clock> AgencyCache<P, C> {
    /// Create an empty cache with a custom clock.
    pub fn with_clock(provider: P, clock: C, config: &AgencyCacheConfig) -> Self {
        Self {
            provider,
            clock,
            ttl: config.ttl,
            entry: RwLock::new(Arc::new(AgencyCacheEntry::default())),
        }
    }

    /// Seed the cache with an existing entry.
    pub fn with_entry(mut self, entry: AgencyCacheEntry) -> Self {
        self.entry = RwLock::new(Arc::new(entry));
        self
    }

    /// Get the agency list as of the clock's current time.
    pub async fn get(&self) -> Arc<Vec<Agency>> {
        self.get_at(self.clock.now()).await
    }

    /// Get the agency list as of `now`.
    ///
    /// Within the TTL the cached list is returned without calling the
    /// provider. Past it, the provider is asked for a fresh list; if that
    /// fails the previous list is returned and the refresh time is left
    /// alone, so the next call tries again. Provider errors are only logged.
    pub async fn get_at(&self, now: DateTime<Utc>) -> Arc<Vec<Agency>> {
        let current = self.snapshot().await;

        if current.is_fresh(now, self.ttl) {
            debug!("agency cache fresh, serving cached list");
            return current.agencies.clone();
        }

        info!("agency cache expired, fetching agency list");
        match self.provider.list_agencies().await {
            Ok(agencies) => {
                let refreshed = Arc::new(AgencyCacheEntry::new(agencies, self.clock.now()));

                let mut guard = self.entry.write().await;
                if guard.last_refresh <= refreshed.last_refresh {
                    *guard = refreshed.clone();
                }
                drop(guard);

                info!(count = refreshed.agencies.len(), "refreshed agency list");
                refreshed.agencies.clone()
            }
            Err(e) => {
                warn!(error = %e, "failed to refresh agency list, serving cached copy");
                current.agencies.clone()
            }
        }
    }

    /// The current entry, without triggering a refresh.
    pub async fn snapshot(&self) -> Arc<AgencyCacheEntry> {
        self.entry.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nextbus::NextbusError;
    use chrono::TimeZone;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Clock that only moves when told to.
    #[derive(Clone)]
    struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

    impl ManualClock {
        fn at(t: DateTime<Utc>) -> Self {
            Self(Arc::new(Mutex::new(t)))
        }

        fn set(&self, t: DateTime<Utc>) {
            *self.0.lock().unwrap() = t;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    struct FakeProvider {
        agencies: Vec<Agency>,
        fail: AtomicBool,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(agencies: Vec<Agency>) -> Self {
            Self {
                agencies,
                fail: AtomicBool::new(false),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self::failing_with(Vec::new())
        }

        /// Fails until `fail` is cleared, then serves `agencies`.
        fn failing_with(agencies: Vec<Agency>) -> Self {
            let provider = Self::new(agencies);
            provider.fail.store(true, Ordering::SeqCst);
            provider
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AgencyProvider for FakeProvider {
        async fn list_agencies(&self) -> Result<Vec<Agency>, NextbusError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(NextbusError::Api {
                    status: 500,
                    message: "fake list agencies error".into(),
                });
            }
            Ok(self.agencies.clone())
        }
    }

    fn last_refresh() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn cached() -> Vec<Agency> {
        vec![Agency::new("la-metro", "Los Angeles Metro")]
    }

    fn fresh() -> Vec<Agency> {
        vec![Agency::new("sf-muni", "San Francisco MTA")]
    }

    fn seeded(provider: FakeProvider, clock: ManualClock) -> AgencyCache<FakeProvider, ManualClock> {
        AgencyCache::with_clock(provider, clock, &AgencyCacheConfig::default())
            .with_entry(AgencyCacheEntry::new(cached(), last_refresh()))
    }

    #[test]
    fn default_config() {
        assert_eq!(AgencyCacheConfig::default().ttl, Duration::hours(24));
    }

    #[test]
    fn empty_entry_is_never_fresh() {
        let entry = AgencyCacheEntry::default();
        assert!(!entry.is_fresh(last_refresh(), Duration::hours(24)));
    }

    #[tokio::test]
    async fn serves_cache_within_ttl() {
        let now = last_refresh() + Duration::hours(24) - Duration::seconds(1);
        let cache = seeded(FakeProvider::new(fresh()), ManualClock::at(now));

        let got = cache.get_at(now).await;

        assert_eq!(*got, cached());
        assert_eq!(cache.provider.calls(), 0);
    }

    #[tokio::test]
    async fn ttl_boundary_is_still_fresh() {
        let now = last_refresh() + Duration::hours(24);
        let cache = seeded(FakeProvider::new(fresh()), ManualClock::at(now));

        assert_eq!(*cache.get_at(now).await, cached());
        assert_eq!(cache.provider.calls(), 0);
    }

    #[tokio::test]
    async fn refreshes_after_ttl() {
        let now = last_refresh() + Duration::hours(24) + Duration::seconds(1);
        let cache = seeded(FakeProvider::new(fresh()), ManualClock::at(now));

        let got = cache.get_at(now).await;

        assert_eq!(*got, fresh());
        assert_eq!(cache.provider.calls(), 1);
        assert_eq!(cache.snapshot().await.last_refresh, Some(now));

        // Same or later time inside the new window: no further fetch.
        assert_eq!(*cache.get_at(now).await, fresh());
        assert_eq!(*cache.get_at(now + Duration::hours(1)).await, fresh());
        assert_eq!(cache.provider.calls(), 1);
    }

    #[tokio::test]
    async fn refresh_time_is_taken_after_fetch() {
        let now = last_refresh() + Duration::hours(25);
        let clock = ManualClock::at(now + Duration::seconds(2));
        let cache = seeded(FakeProvider::new(fresh()), clock);

        cache.get_at(now).await;

        assert_eq!(
            cache.snapshot().await.last_refresh,
            Some(now + Duration::seconds(2))
        );
    }

    #[tokio::test]
    async fn serves_stale_on_provider_failure() {
        let now = last_refresh() + Duration::hours(24) + Duration::seconds(1);
        let cache = seeded(FakeProvider::failing(), ManualClock::at(now));

        let got = cache.get_at(now).await;

        assert_eq!(*got, cached());
        assert_eq!(cache.snapshot().await.last_refresh, Some(last_refresh()));

        // Still expired, so the next call tries again.
        assert_eq!(*cache.get_at(now).await, cached());
        assert_eq!(cache.provider.calls(), 2);
    }

    #[tokio::test]
    async fn recovers_once_provider_comes_back() {
        let now = last_refresh() + Duration::hours(30);
        let cache = seeded(FakeProvider::failing_with(fresh()), ManualClock::at(now));

        assert_eq!(*cache.get_at(now).await, cached());

        cache.provider.fail.store(false, Ordering::SeqCst);
        assert_eq!(*cache.get_at(now).await, fresh());
        assert_eq!(cache.snapshot().await.last_refresh, Some(now));
    }

    #[tokio::test]
    async fn empty_cache_fetches_on_first_use() {
        let clock = ManualClock::at(last_refresh());
        let cache = AgencyCache::with_clock(
            FakeProvider::new(fresh()),
            clock.clone(),
            &AgencyCacheConfig::default(),
        );

        assert_eq!(*cache.get().await, fresh());
        clock.set(last_refresh() + Duration::hours(1));
        assert_eq!(*cache.get().await, fresh());
        assert_eq!(cache.provider.calls(), 1);
    }

    #[tokio::test]
    async fn empty_cache_with_failing_provider_serves_nothing() {
        let cache = AgencyCache::with_clock(
            FakeProvider::failing(),
            ManualClock::at(last_refresh()),
            &AgencyCacheConfig::default(),
        );

        assert!(cache.get().await.is_empty());
        assert_eq!(cache.snapshot().await.last_refresh, None);
    }

    #[tokio::test]
    async fn concurrent_readers_share_one_snapshot() {
        let now = last_refresh() + Duration::hours(1);
        let cache = Arc::new(seeded(FakeProvider::new(fresh()), ManualClock::at(now)));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.get().await })
            })
            .collect();

        for handle in handles {
            assert_eq!(*handle.await.unwrap(), cached());
        }
        assert_eq!(cache.provider.calls(), 0);
    }
}
