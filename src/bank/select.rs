use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffles a copy of `pool` with a generator seeded from `seed` and keeps
/// the first `count` items. The same seed always yields the same order.
pub fn select_challenges<T: Clone>(pool: &[T], count: usize, seed: u64) -> Vec<T> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut picked = pool.to_vec();
    picked.shuffle(&mut rng);
    picked.truncate(count);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        let pool: Vec<u32> = (0..20).collect();
        assert_eq!(select_challenges(&pool, 5, 42), select_challenges(&pool, 5, 42));
    }

    #[test]
    fn never_exceeds_pool() {
        let pool = vec!["a", "b", "c"];
        let picked = select_challenges(&pool, 10, 7);
        assert_eq!(picked.len(), 3);
        let mut sorted = picked.clone();
        sorted.sort();
        assert_eq!(sorted, pool);
    }

    #[test]
    fn takes_requested_count_without_duplicates() {
        let pool: Vec<u32> = (0..20).collect();
        let mut picked = select_challenges(&pool, 8, 3);
        assert_eq!(picked.len(), 8);
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 8);
    }

    #[test]
    fn empty_pool_is_fine() {
        let pool: Vec<u32> = Vec::new();
        assert!(select_challenges(&pool, 3, 1).is_empty());
    }
}
