//! Seeded random inputs for the benchmark harness

use std::ops::{Range, RangeInclusive};

use algolab_core::constants::{workload, DECIMAL_RADIX};
use algolab_core::{Matrix, MatrixElement};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::avl::AvlTree;

/// Deterministic generator: the same seed always yields the same inputs
#[derive(Debug, Clone)]
pub struct Workload {
    rng: StdRng,
}

impl Workload {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Matrix with integral values drawn uniformly from `values`
    ///
    /// `values` must be non-empty.
    pub fn matrix<T: MatrixElement>(
        &mut self,
        rows: usize,
        cols: usize,
        values: Range<i64>,
    ) -> Matrix<T> {
        let rng = &mut self.rng;
        Matrix::from_fn(rows, cols, |_, _| {
            T::from_f64(rng.gen_range(values.clone()) as f64)
        })
    }

    /// Integer with exactly `digits` decimal digits (zero when `digits == 0`)
    pub fn biguint(&mut self, digits: usize) -> BigUint {
        if digits == 0 {
            return BigUint::default();
        }
        let radix = DECIMAL_RADIX as u8;
        let mut be = Vec::with_capacity(digits);
        be.push(self.rng.gen_range(1..radix));
        be.extend((1..digits).map(|_| self.rng.gen_range(0..radix)));
        BigUint::from_radix_be(&be, DECIMAL_RADIX).unwrap_or_default()
    }

    /// `count` keys drawn from `range`, duplicates allowed
    pub fn keys(&mut self, count: usize, range: RangeInclusive<i64>) -> Vec<i64> {
        (0..count)
            .map(|_| self.rng.gen_range(range.clone()))
            .collect()
    }

    /// Demo tree seeded with `count` random keys in the default key range
    ///
    /// Duplicate draws are ignored by the tree, so it may hold fewer than
    /// `count` keys.
    pub fn avl_tree(&mut self, count: usize) -> AvlTree<i64> {
        AvlTree::from_keys(self.keys(count, workload::AVL_KEY_MIN..=workload::AVL_KEY_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        let a: Matrix<i64> = Workload::new(3).matrix(4, 4, 0..10);
        let b: Matrix<i64> = Workload::new(3).matrix(4, 4, 0..10);
        assert_eq!(a, b);
        assert!(a.as_slice().iter().all(|v| (0..10).contains(v)));
    }

    #[test]
    fn test_biguint_digit_count() {
        let mut workload = Workload::new(11);
        for digits in [1, 2, 17, 64] {
            let n = workload.biguint(digits);
            assert_eq!(n.to_str_radix(10).len(), digits);
        }
        assert_eq!(workload.biguint(0), BigUint::default());
    }

    #[test]
    fn test_avl_tree_seed() {
        let tree = Workload::new(5).avl_tree(workload::AVL_SEED_KEYS);
        assert!(tree.len() <= workload::AVL_SEED_KEYS);
        assert!(!tree.is_empty());
        assert!(tree.check_invariants());
        assert!(tree
            .in_order()
            .into_iter()
            .all(|k| (workload::AVL_KEY_MIN..=workload::AVL_KEY_MAX).contains(k)));
    }

    #[test]
    fn test_float_matrix() {
        let m: Matrix<f64> = Workload::new(1).matrix(2, 3, -5..5);
        assert_eq!(m.dimensions(), (2, 3));
        assert!(m.as_slice().iter().all(|v| v.fract() == 0.0));
    }
}
