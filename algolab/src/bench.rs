//! Timing harness
//!
//! [`Runner`] sweeps the configured workloads, timing every algorithm on
//! identical inputs and checking each result against a reference so a
//! fast but wrong answer is visible in the report. Results are collected
//! in a [`BenchReport`], which renders as a text table or serializes to
//! JSON.

use std::fmt;
use std::time::Instant;

use algolab_core::constants::FLOAT_TOLERANCE;
use algolab_core::{strassen_depth, ElementKind, Matrix, MatrixElement};
use hashbrown::HashMap;
use num_bigint::BigUint;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::avl::AvlTree;
use crate::config::LabConfig;
use crate::linear::LinearKind;
use crate::matrix::multiply_parallel;
use crate::workload::Workload;
use crate::Result;

/// Which family a measurement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Group {
    Matrix,
    BigMul,
    Stack,
    Queue,
    Avl,
}

impl Group {
    pub const fn name(self) -> &'static str {
        match self {
            Group::Matrix => "matrix",
            Group::BigMul => "bigmul",
            Group::Stack => "stack",
            Group::Queue => "queue",
            Group::Avl => "avl",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One timed operation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub group: Group,
    /// Strategy or backend name
    pub algorithm: String,
    /// Operation timed, e.g. `multiply` or `dequeue`
    pub operation: String,
    /// Matrix side, operand digits or element count
    pub size: usize,
    pub seconds: f64,
    /// Whether the output matched the reference
    pub verified: bool,
    /// Element type of matrix operands
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub element: Option<ElementKind>,
    /// Tree rotations performed during the operation
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rotations: Option<u64>,
}

impl Measurement {
    fn new(
        group: Group,
        algorithm: impl Into<String>,
        operation: &str,
        size: usize,
        seconds: f64,
        verified: bool,
    ) -> Self {
        Self {
            group,
            algorithm: algorithm.into(),
            operation: operation.to_string(),
            size,
            seconds,
            verified,
            element: None,
            rotations: None,
        }
    }
}

/// Collected measurements of a run
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchReport {
    pub seed: u64,
    pub measurements: Vec<Measurement>,
}

impl BenchReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            measurements: Vec::new(),
        }
    }

    pub fn extend(&mut self, measurements: impl IntoIterator<Item = Measurement>) {
        self.measurements.extend(measurements);
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Whether every measured output matched its reference
    pub fn all_verified(&self) -> bool {
        self.measurements.iter().all(|m| m.verified)
    }

    /// Total seconds per `(group, algorithm, operation)`
    pub fn totals(&self) -> HashMap<(Group, &str, &str), f64> {
        let mut totals = HashMap::new();
        for m in &self.measurements {
            *totals
                .entry((m.group, m.algorithm.as_str(), m.operation.as_str()))
                .or_insert(0.0) += m.seconds;
        }
        totals
    }

    /// Fastest algorithm for each `(group, operation, size)` case
    pub fn fastest(&self) -> HashMap<(Group, &str, usize), &Measurement> {
        let mut best: HashMap<(Group, &str, usize), &Measurement> = HashMap::new();
        for m in &self.measurements {
            best.entry((m.group, m.operation.as_str(), m.size))
                .and_modify(|cur| {
                    if m.seconds < cur.seconds {
                        *cur = m;
                    }
                })
                .or_insert(m);
        }
        best
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:<16} {:<10} {:>8} {:>12}  check",
            "group", "algorithm", "operation", "size", "seconds"
        )?;
        for m in &self.measurements {
            write!(
                f,
                "{:<8} {:<16} {:<10} {:>8} {:>12.6}  {}",
                m.group,
                m.algorithm,
                m.operation,
                m.size,
                m.seconds,
                if m.verified { "ok" } else { "MISMATCH" }
            )?;
            if let Some(element) = m.element {
                write!(f, "  element={element}")?;
            }
            if let Some(rotations) = m.rotations {
                write!(f, "  rotations={rotations}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Exact equality for integer kinds, relative tolerance for floats
fn products_match<T: MatrixElement>(product: &Matrix<T>, reference: &Matrix<T>) -> bool {
    if T::kind().is_exact() {
        return product == reference;
    }
    product.dimensions() == reference.dimensions()
        && product
            .as_slice()
            .iter()
            .zip(reference.as_slice())
            .all(|(&x, &y)| {
                let (x, y) = (x.to_f64(), y.to_f64());
                (x - y).abs() <= FLOAT_TOLERANCE * y.abs().max(1.0)
            })
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64())
}

/// Runs benchmark sweeps described by a [`LabConfig`]
#[derive(Debug, Clone)]
pub struct Runner {
    config: LabConfig,
}

impl Runner {
    pub fn new(config: LabConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Every sweep in order: matrix, long integers, linear structures, AVL
    pub fn run_all(&self) -> Result<BenchReport> {
        self.config.validate()?;
        let mut report = BenchReport::new(self.config.seed);
        report.extend(self.run_matrix()?);
        report.extend(self.run_bigmul());
        report.extend(self.run_linear());
        report.extend(self.run_avl());
        report.extend([self.run_avl_seeded()]);
        info!(
            measurements = report.measurements.len(),
            verified = report.all_verified(),
            "run complete"
        );
        Ok(report)
    }

    /// Time each configured strategy on random square matrices
    pub fn run_matrix(&self) -> Result<Vec<Measurement>> {
        let mut workload = Workload::new(self.config.seed);
        let cases: Vec<(Matrix<i64>, Matrix<i64>)> = self
            .config
            .matrix_sizes
            .clone()
            .map(|n| {
                let a = workload.matrix(n, n, self.config.value_range.clone());
                let b = workload.matrix(n, n, self.config.value_range.clone());
                (a, b)
            })
            .collect();

        info!(
            sizes = ?self.config.matrix_sizes,
            strategies = self.config.strategies.len(),
            "matrix sweep"
        );

        let per_case = |(a, b): &(Matrix<i64>, Matrix<i64>)| self.run_matrix_pair(a, b);
        let results: Vec<Vec<Measurement>> = if self.config.parallel {
            cases.par_iter().map(per_case).collect::<Result<_>>()?
        } else {
            cases.iter().map(per_case).collect::<Result<_>>()?
        };
        Ok(results.into_iter().flatten().collect())
    }

    /// Time each configured strategy on one operand pair
    ///
    /// Non-square pairs skip the Strassen strategies instead of failing,
    /// so a rectangular file can still be compared across the rest.
    pub fn run_matrix_pair<T: MatrixElement>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<Vec<Measurement>> {
        let reference = multiply_parallel(a, b)?;
        let square = a.is_square() && a.dimensions() == b.dimensions();

        let mut out = Vec::with_capacity(self.config.strategies.len());
        for &strategy in &self.config.strategies {
            if strategy.requires_square() && !square {
                debug!(%strategy, dims = ?a.dimensions(), "skipping non-square pair");
                continue;
            }
            let (product, seconds) = timed(|| strategy.multiply(a, b));
            let verified = products_match(&product?, &reference);
            if strategy.requires_square() {
                debug!(%strategy, depth = strassen_depth(a.rows()), "recursion depth");
            }
            debug!(%strategy, size = a.rows(), seconds, verified, "matrix case");
            let mut measurement = Measurement::new(
                Group::Matrix,
                strategy.name(),
                "multiply",
                a.rows(),
                seconds,
                verified,
            );
            measurement.element = Some(T::kind());
            out.push(measurement);
        }
        Ok(out)
    }

    /// Time each long multiplication algorithm across the digit sweep
    pub fn run_bigmul(&self) -> Vec<Measurement> {
        let mut workload = Workload::new(self.config.seed);
        let cases: Vec<(usize, BigUint, BigUint)> = self
            .config
            .digit_sweep()
            .map(|digits| (digits, workload.biguint(digits), workload.biguint(digits)))
            .collect();

        info!(cases = cases.len(), "long multiplication sweep");

        let per_case = |(digits, x, y): &(usize, BigUint, BigUint)| -> Vec<Measurement> {
            let expected = x * y;
            self.config
                .bigmul_strategies
                .iter()
                .map(|&strategy| {
                    let (product, seconds) = timed(|| strategy.multiply(x, y));
                    let verified = product == expected;
                    debug!(%strategy, digits, seconds, verified, "bigmul case");
                    Measurement::new(
                        Group::BigMul,
                        strategy.name(),
                        "multiply",
                        *digits,
                        seconds,
                        verified,
                    )
                })
                .collect()
        };

        if self.config.parallel {
            cases.par_iter().flat_map_iter(per_case).collect()
        } else {
            cases.iter().flat_map(per_case).collect()
        }
    }

    /// Push then drain `structure_count` elements through every backend
    pub fn run_linear(&self) -> Vec<Measurement> {
        let n = self.config.structure_count;
        info!(count = n, ring_capacity = self.config.ring_capacity, "linear sweep");

        let mut out = Vec::new();
        for kind in [LinearKind::Array, LinearKind::Linked] {
            out.extend(time_stack(kind, n));
        }
        for kind in [
            LinearKind::Array,
            LinearKind::Linked,
            LinearKind::Ring {
                capacity: self.config.ring_capacity,
            },
        ] {
            out.extend(time_queue(kind, n));
        }
        out
    }

    /// Insert then delete `structure_count` random keys
    pub fn run_avl(&self) -> Vec<Measurement> {
        let n = self.config.structure_count;
        let upper = i64::try_from(n.saturating_mul(10)).unwrap_or(i64::MAX).max(1);
        let keys = Workload::new(self.config.seed).keys(n, 1..=upper);
        info!(count = n, "avl sweep");

        let mut tree: AvlTree<i64> = AvlTree::new();
        let (_, insert_seconds) = timed(|| tree.extend(keys.iter().copied()));
        let insert_rotations = tree.rotation_count();
        let mut insert = Measurement::new(
            Group::Avl,
            "avl",
            "insert",
            n,
            insert_seconds,
            tree.check_invariants(),
        );
        insert.rotations = Some(insert_rotations);

        let (_, delete_seconds) = timed(|| {
            for key in &keys {
                tree.delete_key(key);
            }
        });
        let mut delete = Measurement::new(
            Group::Avl,
            "avl",
            "delete",
            n,
            delete_seconds,
            tree.is_empty() && tree.check_invariants(),
        );
        delete.rotations = Some(tree.rotation_count() - insert_rotations);
        debug!(
            insert_seconds,
            delete_seconds,
            rotations = tree.rotation_count(),
            "avl case"
        );

        vec![insert, delete]
    }

    /// Build the demo tree from `avl_seed_keys` random keys
    ///
    /// Duplicate draws are dropped, so the tree may hold fewer keys than
    /// requested.
    pub fn run_avl_seeded(&self) -> Measurement {
        let n = self.config.avl_seed_keys;
        let mut workload = Workload::new(self.config.seed);
        let (tree, seconds) = timed(|| workload.avl_tree(n));
        debug!(keys = n, len = tree.len(), height = tree.height(), "avl seed");

        let mut seed = Measurement::new(
            Group::Avl,
            "avl",
            "seed",
            n,
            seconds,
            tree.len() <= n && tree.check_invariants(),
        );
        seed.rotations = Some(tree.rotation_count());
        seed
    }
}

fn time_stack(kind: LinearKind, n: usize) -> [Measurement; 2] {
    let mut stack = kind.new_stack::<usize>();
    let (_, push_seconds) = timed(|| (0..n).for_each(|i| stack.push(i)));
    let pushed_all = stack.size() == n;

    let (popped, pop_seconds) = timed(|| (0..n).map_while(|_| stack.pop()).collect::<Vec<_>>());
    let lifo = popped.iter().copied().eq((0..n).rev());
    debug!(%kind, push_seconds, pop_seconds, "stack case");

    [
        Measurement::new(
            Group::Stack,
            kind.name(),
            "push",
            n,
            push_seconds,
            pushed_all,
        ),
        Measurement::new(
            Group::Stack,
            kind.name(),
            "pop",
            n,
            pop_seconds,
            lifo && stack.is_empty(),
        ),
    ]
}

fn time_queue(kind: LinearKind, n: usize) -> [Measurement; 2] {
    let mut queue = kind.new_queue::<usize>();
    let (_, enqueue_seconds) = timed(|| (0..n).for_each(|i| queue.enqueue(i)));
    let accepted = queue.size();
    if accepted < n {
        warn!(%kind, dropped = n - accepted, "queue full, enqueues dropped");
    }
    let expected_len = match kind {
        LinearKind::Ring { capacity } => n.min(capacity),
        _ => n,
    };

    let (drained, dequeue_seconds) =
        timed(|| (0..n).map_while(|_| queue.dequeue()).collect::<Vec<_>>());
    let fifo = drained.iter().copied().eq(0..accepted);
    debug!(%kind, enqueue_seconds, dequeue_seconds, "queue case");

    [
        Measurement::new(
            Group::Queue,
            kind.name(),
            "enqueue",
            n,
            enqueue_seconds,
            accepted == expected_len,
        ),
        Measurement::new(
            Group::Queue,
            kind.name(),
            "dequeue",
            n,
            dequeue_seconds,
            fifo && queue.is_empty(),
        ),
    ]
}
