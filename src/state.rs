//! Per-row/per-column assignment bookkeeping and the public solution type.

/// A complete solution to a linear sum assignment problem, together with
/// the dual potentials that certify its optimality.
///
/// For an `m`-row by `n`-column cost matrix with `m <= n`, every row is
/// assigned (`col4row` has no `None` entries); columns may or may not
/// be, depending on whether `m < n`. Symmetrically, when `m > n` every
/// column is assigned and some rows are not. The dual potentials `u`
/// (one per row) and `v` (one per column) satisfy complementary
/// slackness with `col4row`/`row4col`: for every matched pair `(i, j)`,
/// `u[i] + v[j] == cost[i][j]`, and for every pair,
/// `u[i] + v[j] <= cost[i][j]`.
///
/// `col4row`/`row4col` use `Option<usize>` rather than the reference
/// solver's `-1`-means-unassigned sentinel: an absent partner is a
/// distinct, unrepresentable-by-accident state here, not a magic index
/// that every reader of `col4row` must remember to special-case.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// `col4row[i]` is the column assigned to row `i`, or `None` if row
    /// `i` is unmatched.
    pub col4row: Vec<Option<usize>>,
    /// `row4col[j]` is the row assigned to column `j`, or `None` if
    /// column `j` is unmatched.
    pub row4col: Vec<Option<usize>>,
    /// The dual potential associated with each row.
    pub u: Vec<f64>,
    /// The dual potential associated with each column.
    pub v: Vec<f64>,
}

impl Solution {
    /// The total cost of this solution under `cost`, recomputed by
    /// summing `cost[i][col4row[i]]` over every matched row.
    ///
    /// This does not trust `u`/`v`; it is the ground-truth cost that a
    /// caller who trusts only `col4row` would compute themselves, so it
    /// is a useful invariant check against `self.dual_cost()`.
    pub fn primal_cost(&self, cost: &crate::CostMatrix) -> f64 {
        self.col4row
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| cost.get(row, col)))
            .sum()
    }

    /// The total cost implied by the dual potentials, `sum(u) + sum(v[j])`
    /// over assigned columns `j`.
    ///
    /// Only columns actually present in `row4col` contribute: an
    /// unassigned column's `v` entry is not part of the optimality
    /// certificate, and some callers (the incremental re-solvers'
    /// bookkeeping-only fast path in particular) leave a stale, non-zero
    /// `v` entry behind for a column that has since become unassigned.
    /// Summing it unconditionally would overstate the dual cost.
    ///
    /// At optimality this equals [`Solution::primal_cost`]; the
    /// difference between the two is the duality gap, which a correct
    /// solver must close to (numerically) zero.
    pub fn dual_cost(&self) -> f64 {
        self.u.iter().sum::<f64>()
            + self
                .row4col
                .iter()
                .enumerate()
                .filter_map(|(col, row)| row.is_some().then_some(self.v[col]))
                .sum::<f64>()
    }
}
