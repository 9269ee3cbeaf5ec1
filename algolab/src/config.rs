//! Laboratory configuration
//!
//! One [`LabConfig`] drives a whole benchmark run. It can be built in code
//! with the `with_*` methods or loaded from a JSON file; missing fields in
//! the file fall back to the defaults.

use std::ops::Range;

use algolab_core::constants::workload;
use algolab_core::LabError;

use crate::bigmul::BigMulStrategy;
use crate::matrix::Strategy;

/// Parameters for a benchmark run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabConfig {
    /// Seed for every random workload
    pub seed: u64,
    /// Square matrix sizes to sweep, end exclusive
    pub matrix_sizes: Range<usize>,
    /// Element values drawn for random matrices, end exclusive
    pub value_range: Range<i64>,
    /// Matrix strategies to time
    pub strategies: Vec<Strategy>,
    /// Long-integer algorithms to time
    pub bigmul_strategies: Vec<BigMulStrategy>,
    /// Operand lengths in decimal digits, end exclusive
    pub digit_lengths: Range<usize>,
    /// Stride through `digit_lengths`
    pub digit_step: usize,
    /// Elements pushed through each stack and queue
    pub structure_count: usize,
    /// Capacity of the ring queue under test
    pub ring_capacity: usize,
    /// Random keys used to seed the AVL tree
    pub avl_seed_keys: usize,
    /// Run independent cases on the rayon pool
    pub parallel: bool,
}

impl LabConfig {
    /// Set the workload seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_matrix_sizes(mut self, sizes: Range<usize>) -> Self {
        self.matrix_sizes = sizes;
        self
    }

    pub fn with_value_range(mut self, values: Range<i64>) -> Self {
        self.value_range = values;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_bigmul_strategies(mut self, strategies: Vec<BigMulStrategy>) -> Self {
        self.bigmul_strategies = strategies;
        self
    }

    /// Set operand lengths and the stride between them
    pub fn with_digit_lengths(mut self, lengths: Range<usize>, step: usize) -> Self {
        self.digit_lengths = lengths;
        self.digit_step = step;
        self
    }

    pub fn with_structure_count(mut self, count: usize) -> Self {
        self.structure_count = count;
        self
    }

    pub fn with_ring_capacity(mut self, capacity: usize) -> Self {
        self.ring_capacity = capacity;
        self
    }

    pub fn with_avl_seed_keys(mut self, keys: usize) -> Self {
        self.avl_seed_keys = keys;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Operand lengths actually swept, honoring `digit_step`
    pub fn digit_sweep(&self) -> impl Iterator<Item = usize> + '_ {
        self.digit_lengths.clone().step_by(self.digit_step.max(1))
    }

    /// Reject ranges the harness cannot sample from
    pub fn validate(&self) -> Result<(), LabError> {
        if self.matrix_sizes.start == 0 {
            return Err(LabError::EmptyMatrix);
        }
        if self.matrix_sizes.is_empty()
            || self.digit_lengths.is_empty()
            || self.digit_lengths.start == 0
            || self.value_range.is_empty()
        {
            return Err(LabError::InvalidRange);
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: LabConfig = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded configuration");
        Ok(config)
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            matrix_sizes: 2..9,
            value_range: workload::VALUE_MIN..workload::VALUE_MAX,
            strategies: Strategy::all().to_vec(),
            bigmul_strategies: BigMulStrategy::all().to_vec(),
            digit_lengths: 10..200,
            digit_step: 10,
            structure_count: workload::STRUCTURE_COUNT,
            ring_capacity: workload::RING_CAPACITY,
            avl_seed_keys: workload::AVL_SEED_KEYS,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = LabConfig::default()
            .with_seed(7)
            .with_matrix_sizes(3..5)
            .with_strategies(vec![Strategy::Classic])
            .with_digit_lengths(4..20, 4)
            .with_parallel(true);
        assert_eq!(config.seed, 7);
        assert_eq!(config.matrix_sizes, 3..5);
        assert_eq!(config.strategies, vec![Strategy::Classic]);
        assert_eq!(config.digit_sweep().collect::<Vec<_>>(), vec![4, 8, 12, 16]);
        assert!(config.parallel);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate() {
        assert_eq!(LabConfig::default().validate(), Ok(()));
        assert_eq!(
            LabConfig::default().with_matrix_sizes(0..4).validate(),
            Err(LabError::EmptyMatrix)
        );
        assert_eq!(
            LabConfig::default().with_value_range(5..5).validate(),
            Err(LabError::InvalidRange)
        );
    }

    #[test]
    fn test_zero_step_still_advances() {
        let config = LabConfig::default().with_digit_lengths(1..4, 0);
        assert_eq!(config.digit_sweep().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_partial_fields() {
        let json = r#"{
            "seed": 42,
            "strategies": ["padded-strassen"],
            "matrix_sizes": {"start": 4, "end": 6}
        }"#;
        let config: LabConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.strategies, vec![Strategy::PaddedStrassen]);
        assert_eq!(config.matrix_sizes, 4..6);
        assert_eq!(config.structure_count, workload::STRUCTURE_COUNT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("algolab-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"ring_capacity": 3, "avl_seed_keys": 5}"#).unwrap();
        let config = LabConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.ring_capacity, 3);
        assert_eq!(config.avl_seed_keys, 5);

        assert!(matches!(
            LabConfig::from_json_file(path),
            Err(crate::Error::Io(_))
        ));
    }
}
