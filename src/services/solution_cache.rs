use filter_solver::{Rgb, Solution};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default maximum number of cached solutions
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Cache key: target color and the seed that produced the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub color: [u8; 3],
    pub seed: u64,
}

impl CacheKey {
    pub fn new(color: Rgb, seed: u64) -> Self {
        Self {
            color: color.to_bytes(),
            seed,
        }
    }
}

#[derive(Default)]
struct Entries {
    solutions: HashMap<CacheKey, Solution>,
    /// Keys from oldest to newest insertion
    insertion_order: VecDeque<CacheKey>,
}

/// Cache for solved filter chains, bounded with oldest-first eviction
///
/// Only seeded solves are deterministic, so only they are worth caching.
/// Seeds come from clients, so the number of entries is capped.
pub struct SolutionCache {
    entries: Arc<RwLock<Entries>>,
    max_entries: usize,
}

impl SolutionCache {
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Entries::default())),
            max_entries,
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Store a solution, evicting the oldest entries when full
    pub async fn store(&self, key: CacheKey, solution: Solution) {
        if self.max_entries == 0 {
            return;
        }
        let mut entries = self.entries.write().await;

        if entries.solutions.contains_key(&key) {
            entries.insertion_order.retain(|k| k != &key);
        }

        while entries.solutions.len() >= self.max_entries {
            let Some(oldest) = entries.insertion_order.pop_front() else {
                break;
            };
            entries.solutions.remove(&oldest);
            tracing::debug!(
                color = ?oldest.color,
                seed = oldest.seed,
                cache_size = entries.solutions.len(),
                "Solution cache: evicted oldest entry"
            );
        }

        entries.solutions.insert(key, solution);
        entries.insertion_order.push_back(key);
    }

    /// Retrieve a cached solution
    pub async fn get(&self, key: &CacheKey) -> Option<Solution> {
        let entries = self.entries.read().await;
        entries.solutions.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.solutions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for SolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_solver::FilterParams;

    #[tokio::test]
    async fn test_store_and_get() {
        let cache = SolutionCache::new();
        let key = CacheKey::new(Rgb::WHITE, 7);
        assert!(cache.get(&key).await.is_none());

        let solution = Solution::new(Rgb::WHITE, FilterParams::default(), 865.0);
        cache.store(key, solution.clone()).await;

        assert_eq!(cache.get(&key).await, Some(solution));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_seed_is_part_of_key() {
        let cache = SolutionCache::new();
        let solution = Solution::new(Rgb::BLACK, FilterParams::default(), 0.0);
        cache.store(CacheKey::new(Rgb::BLACK, 1), solution).await;

        assert!(cache.get(&CacheKey::new(Rgb::BLACK, 2)).await.is_none());
        assert!(cache.get(&CacheKey::new(Rgb::WHITE, 1)).await.is_none());
    }

    #[tokio::test]
    async fn test_evicts_oldest_past_max_entries() {
        let cache = SolutionCache::with_max_entries(3);
        let solution = Solution::new(Rgb::BLACK, FilterParams::default(), 0.0);
        for seed in 0..5 {
            cache.store(CacheKey::new(Rgb::BLACK, seed), solution.clone()).await;
        }

        assert_eq!(cache.len().await, 3);
        assert!(cache.get(&CacheKey::new(Rgb::BLACK, 0)).await.is_none());
        assert!(cache.get(&CacheKey::new(Rgb::BLACK, 1)).await.is_none());
        for seed in 2..5 {
            assert!(cache.get(&CacheKey::new(Rgb::BLACK, seed)).await.is_some());
        }
    }

    #[tokio::test]
    async fn test_restoring_a_key_refreshes_its_age() {
        let cache = SolutionCache::with_max_entries(2);
        let solution = Solution::new(Rgb::BLACK, FilterParams::default(), 0.0);
        cache.store(CacheKey::new(Rgb::BLACK, 1), solution.clone()).await;
        cache.store(CacheKey::new(Rgb::BLACK, 2), solution.clone()).await;
        cache.store(CacheKey::new(Rgb::BLACK, 1), solution.clone()).await;
        cache.store(CacheKey::new(Rgb::BLACK, 3), solution).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get(&CacheKey::new(Rgb::BLACK, 1)).await.is_some());
        assert!(cache.get(&CacheKey::new(Rgb::BLACK, 2)).await.is_none());
    }

    #[tokio::test]
    async fn test_zero_capacity_stores_nothing() {
        let cache = SolutionCache::with_max_entries(0);
        let solution = Solution::new(Rgb::BLACK, FilterParams::default(), 0.0);
        cache.store(CacheKey::new(Rgb::BLACK, 1), solution).await;
        assert!(cache.is_empty().await);
    }
}
