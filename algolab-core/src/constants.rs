//! Thresholds and workload defaults shared by algolab crates

/// Strassen recursion switches to classic multiplication at or below this size
pub const STRASSEN_BASE_SIZE: usize = 2;

/// Karatsuba multiplies directly once an operand is below this value
pub const KARATSUBA_BASE: u32 = 10;

/// Numeric base of the digit-wise long multiplication
pub const DECIMAL_RADIX: u32 = 10;

/// Relative tolerance when checking floating-point products
pub const FLOAT_TOLERANCE: f64 = 1e-4;

/// Workload defaults
pub mod workload {
    /// Lower bound (inclusive) of generated matrix values
    pub const VALUE_MIN: i64 = 0;

    /// Upper bound (exclusive) of generated matrix values
    pub const VALUE_MAX: i64 = 10;

    /// Number of random keys a fresh demo tree is seeded with
    pub const AVL_SEED_KEYS: usize = 20;

    /// Inclusive key range for seeded trees
    pub const AVL_KEY_MIN: i64 = 1;
    pub const AVL_KEY_MAX: i64 = 100;

    /// Default capacity of the ring-buffer queue
    pub const RING_CAPACITY: usize = 1_000;

    /// Default element count for stack/queue timing runs
    pub const STRUCTURE_COUNT: usize = 10_000;
}
