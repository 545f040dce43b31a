//! The all-pairs constrained assignment driver.
//!
//! For an `m x n` cost matrix, [`clap_costs`] computes, for every
//! `(row, col)` pair, the optimal total cost of an assignment that is
//! forced to match `row` to `col`. The naive way to get this is `m * n`
//! independent calls to [`crate::lsap::solve`]; this driver instead
//! solves the unconstrained problem once and reuses its dual solution
//! for every pair, via three layers of shortcuts of increasing cost (plus
//! one short-circuit ahead of all of them: a pair whose own `C[row, col]`
//! is already `+inf` is `+inf` regardless of the rest of the assignment, so
//! it never reaches the repair search below):
//!
//! 1. A pair already realized by the unconstrained optimum costs
//!    exactly the unconstrained optimum (the diagonal).
//! 2. Any other pair is built on top of `A' = solve_with_removed_row(i)`
//!    (see [`crate::incremental`]), computed once per row: dropping row
//!    `i` can cascade into a reassignment of whichever row previously
//!    held the column `i` frees, so `A'`'s total is not simply
//!    `lsap_total - lsap_costs[i]`. Forcing row `i` onto a column nobody
//!    holds in `A'` costs exactly `A'_total + C[i, j]`.
//! 3. Forcing row `i` onto a column `j` held in `A'` by some other row
//!    `k` requires giving `k` a new column. [`rank_row`] precomputes
//!    each row's three cheapest columns so this can usually be resolved
//!    in `O(1)`: if `k`'s best (or second-best) alternative to `j` is
//!    free and unambiguously cheaper than its runner-up, hand it over
//!    directly. Only when that local check can't decide — the
//!    alternative is itself taken, or tied with its runner-up — does
//!    this driver fall back to the exact incremental re-solve
//!    ([`solve_with_removed_col`] on top of `A'`).
//!
//! This mirrors the source algorithm's split between an `O(1)`
//! best/second/third-best shortcut and an exact fallback for the cases
//! that shortcut admits it cannot decide (see the module-level docs in
//! [`crate::ranking`] and the ambiguity note in this crate's design
//! notes).

use crate::{
    CostMatrix,
    errors::ClapError,
    incremental::{solve_with_removed_col, solve_with_removed_row},
    lsap::solve_with_duals,
    ranking::{RowRanking, rank_row},
    state::Solution,
};

/// Computes the all-pairs constrained assignment cost matrix for
/// `cost`.
///
/// `result.get(row, col)` is the minimum total cost of any complete
/// assignment of `cost` that matches `row` to `col`. If `cost` admits
/// no complete assignment at all (some row has no finite-cost column
/// reachable from it), every entry of the result is `f64::INFINITY`
/// rather than an error, matching the convention that a forbidden
/// assignment has infinite cost.
///
/// # Errors
///
/// Returns [`ClapError::InvalidValue`] if `cost` is malformed (see
/// [`CostMatrix::from_rows`]).
pub fn clap_costs(cost: &CostMatrix) -> Result<CostMatrix, ClapError> {
    let nrows = cost.num_rows();
    let ncols = cost.num_cols();

    let base = match solve_with_duals(cost, false) {
        Ok(solution) => solution,
        Err(crate::errors::LsapError::Infeasible) => {
            let data = vec![f64::INFINITY; nrows * ncols];
            return CostMatrix::from_flat(nrows, ncols, data).map_err(ClapError::from);
        }
        Err(error) => return Err(ClapError::from(error)),
    };
    let base_total = base.primal_cost(cost);

    let rankings: Vec<RowRanking> = (0..nrows).map(|row| rank_row(cost, row)).collect();

    let mut data = vec![0.0; nrows * ncols];
    for row in 0..nrows {
        let own_col = base.col4row[row];
        let without_row = cost.without_row(row);

        // A' : the optimal assignment of every row but `row`, accounting
        // for whatever cascade dropping `row` sets off. Computed once per
        // row and reused for every column in it.
        let mut row_removed = solve_with_removed_row(&mut base.clone(), cost, row, false);
        let row_removed_total = row_removed.primal_cost(&without_row);
        let mut removed_occupied = vec![false; ncols];
        for col in row_removed.col4row.iter().flatten() {
            removed_occupied[*col] = true;
        }

        for col in 0..ncols {
            let value = if own_col == Some(col) {
                base_total
            } else if !cost.get(row, col).is_finite() {
                // Forcing a forbidden pair is infinite regardless of how
                // the rest of the assignment shakes out; skip the repair
                // search entirely rather than feeding `+inf` through it.
                f64::INFINITY
            } else if let Some(shifted_holder) = row_removed.row4col[col] {
                let stolen_from = unshift_row(shifted_holder, row);
                match fast_reassignment_cost(&rankings[stolen_from], &removed_occupied, col) {
                    Some(reassigned_cost) => {
                        cost.get(row, col) + row_removed_total
                            - cost.get(stolen_from, col)
                            + reassigned_cost
                    }
                    None => forced_pair_cost(cost, &without_row, &mut row_removed, row, col)?,
                }
            } else {
                // `col` is unused in A': the cheapest way to occupy it is
                // to add row's own cost to A's total.
                row_removed_total + cost.get(row, col)
            };
            data[row * ncols + col] = value;
        }
    }

    CostMatrix::from_flat(nrows, ncols, data).map_err(ClapError::from)
}

/// Computes a single entry of [`clap_costs`] without materializing the
/// whole matrix.
///
/// # Errors
///
/// Returns [`ClapError::InvalidValue`] if `cost` is malformed.
pub fn clap_cost(cost: &CostMatrix, row: usize, col: usize) -> Result<f64, ClapError> {
    let base = match solve_with_duals(cost, false) {
        Ok(solution) => solution,
        Err(crate::errors::LsapError::Infeasible) => return Ok(f64::INFINITY),
        Err(error) => return Err(ClapError::from(error)),
    };
    if base.col4row[row] == Some(col) {
        return Ok(base.primal_cost(cost));
    }
    if !cost.get(row, col).is_finite() {
        return Ok(f64::INFINITY);
    }

    let without_row = cost.without_row(row);
    let mut row_removed = solve_with_removed_row(&mut base.clone(), cost, row, false);
    let row_removed_total = row_removed.primal_cost(&without_row);

    if let Some(shifted_holder) = row_removed.row4col[col] {
        let stolen_from = unshift_row(shifted_holder, row);
        let mut occupied = vec![false; cost.num_cols()];
        for c in row_removed.col4row.iter().flatten() {
            occupied[*c] = true;
        }
        let ranking = rank_row(cost, stolen_from);
        if let Some(reassigned_cost) = fast_reassignment_cost(&ranking, &occupied, col) {
            return Ok(cost.get(row, col) + row_removed_total - cost.get(stolen_from, col)
                + reassigned_cost);
        }
        forced_pair_cost(cost, &without_row, &mut row_removed, row, col)
    } else {
        Ok(row_removed_total + cost.get(row, col))
    }
}

/// Maps a row index as it appears in a [`Solution`] returned by
/// [`solve_with_removed_row(.., removed_row, ..)`] back to its index in
/// the original (un-removed) cost matrix: indices at or above
/// `removed_row` were shifted down by one when that row was dropped.
fn unshift_row(shifted: usize, removed_row: usize) -> usize {
    if shifted < removed_row { shifted } else { shifted + 1 }
}

/// Tries to resolve giving up `stolen_col` from `stolen_from` in `O(1)`
/// using its precomputed best/second/third-cheapest columns.
///
/// `available[j]` must be `true` exactly when column `j` is not held by
/// any row other than `stolen_from` in the assignment being repaired
/// (`stolen_col` itself is never available, since it is being handed to
/// the row forcing this pair). Returns `stolen_from`'s new cost if a
/// replacement column is found unambiguously, `None` if the ranking
/// structure cannot decide and an exact re-solve is needed instead.
///
/// `ranking` must be `stolen_from`'s own [`RowRanking`]. `occupied[j]`
/// must be `true` exactly when column `j` is currently held by some row
/// other than `stolen_from`.
fn fast_reassignment_cost(
    ranking: &RowRanking,
    occupied: &[bool],
    stolen_col: usize,
) -> Option<f64> {
    try_candidate(
        occupied,
        stolen_col,
        Some(ranking.best),
        ranking.best_cost,
        ranking.second,
        ranking.second_cost,
    )
    .or_else(|| {
        try_candidate(
            occupied,
            stolen_col,
            ranking.second,
            ranking.second_cost,
            ranking.third,
            ranking.third_cost,
        )
    })
}

/// Checks whether `candidate` is an unambiguous replacement for
/// `stolen_col`: present, free, and either strictly cheaper than `next`
/// or `next` is not a real competing alternative (absent, itself equal
/// to `stolen_col`, or already held elsewhere).
fn try_candidate(
    occupied: &[bool],
    stolen_col: usize,
    candidate: Option<usize>,
    candidate_cost: f64,
    next: Option<usize>,
    next_cost: f64,
) -> Option<f64> {
    let candidate = candidate?;
    if candidate == stolen_col || occupied[candidate] {
        return None;
    }
    let next_competes = match next {
        None => false,
        Some(next_col) => next_col != stolen_col && !occupied[next_col],
    };
    (!next_competes || candidate_cost < next_cost).then_some(candidate_cost)
}

/// `cost.get(row, col)` plus the optimal cost of assigning every other
/// row to every other column, computed by removing `col` from
/// `row_removed` (the solution of `without_row`, i.e. `cost` with `row`
/// already dropped).
fn forced_pair_cost(
    cost: &CostMatrix,
    without_row: &CostMatrix,
    row_removed: &mut Solution,
    row: usize,
    col: usize,
) -> Result<f64, ClapError> {
    // A forced pair can make the remaining sub-problem infeasible (every
    // row still has a finite-cost column, but not enough of them to go
    // around once `col` is off the table); that is an infinite cost
    // here, not an error, matching a whole-matrix infeasibility.
    match solve_with_removed_col(row_removed, without_row, col, false) {
        Ok(sub_solution) => {
            let sub_cost = sub_solution.primal_cost(&without_row.without_col(col));
            Ok(cost.get(row, col) + sub_cost)
        }
        Err(crate::errors::LsapError::Infeasible) => Ok(f64::INFINITY),
        Err(error) => Err(ClapError::from(error)),
    }
}
