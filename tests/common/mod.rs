//! Shared helpers for the integration test suite: a deterministic PRNG for
//! reproducible random matrices, and brute-force oracles that recompute an
//! assignment cost independently of this crate's incremental machinery.
//!
//! These oracles are intentionally slow (exhaustive permutation search):
//! they exist to check the fast solvers against, not to be fast themselves.
//! Keeping them out of `src/` mirrors the reference implementation, where
//! the equivalent brute-force helpers are test-only and never imported by
//! the library itself.

#![allow(dead_code)]

use lapsolve::CostMatrix;

/// A small, dependency-free PRNG used to generate reproducible random cost
/// matrices for property tests, in place of pulling in the `rand` crate for
/// test-only randomness.
pub struct XorShift64(u64);

impl From<u64> for XorShift64 {
    fn from(seed: u64) -> Self {
        // A zero state is a fixed point of xorshift, so nudge it away from
        // zero the same way most xorshift64 implementations do.
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }
}

impl Iterator for XorShift64 {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        Some(x)
    }
}

impl XorShift64 {
    /// The next pseudo-random value in `[0, bound)`.
    fn bounded(&mut self, bound: u64) -> u64 {
        self.next().expect("XorShift64 is infinite") % bound
    }

    /// The next pseudo-random cost in `[0.0, 100.0)`, to two decimal places.
    fn cost(&mut self) -> f64 {
        (self.bounded(10_000) as f64) / 100.0
    }
}

/// Builds a reproducible `rows x cols` matrix of uniform pseudo-random
/// costs in `[0, 100)`.
pub fn random_cost_matrix(seed: u64, rows: usize, cols: usize) -> CostMatrix {
    let mut rng = XorShift64::from(seed);
    let data: Vec<Vec<f64>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.cost()).collect())
        .collect();
    CostMatrix::from_rows(data).expect("generated matrix is always well-formed")
}

/// Exhaustively searches every way to match `min(rows, cols)` rows to
/// distinct columns and returns the minimum total cost, used as a ground
/// truth oracle for small matrices that [`lapsolve::lsap::solve`] must
/// match exactly.
///
/// # Panics
///
/// Panics if no complete assignment of the smaller side exists (every
/// candidate permutation has infinite cost).
pub fn brute_force_lsap_cost(cost: &CostMatrix) -> f64 {
    let rows = cost.num_rows();
    let cols = cost.num_cols();
    let mut best = f64::INFINITY;

    if rows <= cols {
        for combo in combinations(cols, rows) {
            for perm in permutations(combo) {
                let total: f64 = (0..rows).map(|row| cost.get(row, perm[row])).sum();
                if total < best {
                    best = total;
                }
            }
        }
    } else {
        for combo in combinations(rows, cols) {
            for perm in permutations(combo) {
                let total: f64 = (0..cols).map(|col| cost.get(perm[col], col)).sum();
                if total < best {
                    best = total;
                }
            }
        }
    }

    assert!(best.is_finite(), "no complete assignment exists for this matrix");
    best
}

/// The exact, from-scratch cost of forcing `row` onto `col`: solve the
/// `(rows - 1) x (cols - 1)` sub-problem with both removed, via
/// [`lapsolve::lsap::solve`], then add back `cost.get(row, col)`.
///
/// Returns `f64::INFINITY` if `cost.get(row, col)` is itself infinite, or if
/// the remaining sub-problem has no complete assignment.
pub fn naive_clap_cost(cost: &CostMatrix, row: usize, col: usize) -> f64 {
    let direct = cost.get(row, col);
    if !direct.is_finite() {
        return f64::INFINITY;
    }

    let rows: Vec<Vec<f64>> = (0..cost.num_rows())
        .filter(|&r| r != row)
        .map(|r| {
            (0..cost.num_cols())
                .filter(|&c| c != col)
                .map(|c| cost.get(r, c))
                .collect()
        })
        .collect();

    if rows.is_empty() || rows[0].is_empty() {
        return direct;
    }

    let sub = CostMatrix::from_rows(rows).expect("a well-formed sub-matrix of a well-formed one");
    match lapsolve::lsap::solve(&sub, false) {
        Ok((sub_rows, sub_cols)) => {
            let sub_total: f64 = sub_rows
                .iter()
                .zip(sub_cols.iter())
                .map(|(&r, &c)| sub.get(r, c))
                .sum();
            direct + sub_total
        }
        Err(lapsolve::LsapError::Infeasible) => f64::INFINITY,
        Err(error) => unreachable!("a sub-matrix of a valid matrix is always well-formed: {error}"),
    }
}

/// All `k`-element subsets of `0..n`, in ascending order within each subset.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    combinations_helper(n, k, 0, &mut current, &mut result);
    result
}

fn combinations_helper(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    result: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }
    for value in start..n {
        current.push(value);
        combinations_helper(n, k, value + 1, current, result);
        current.pop();
    }
}

/// Every permutation of `items`.
fn permutations(mut items: Vec<usize>) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    permute_helper(&mut items, 0, &mut result);
    result
}

fn permute_helper(items: &mut Vec<usize>, k: usize, result: &mut Vec<Vec<usize>>) {
    if k == items.len() {
        result.push(items.clone());
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute_helper(items, k + 1, result);
        items.swap(k, i);
    }
}
