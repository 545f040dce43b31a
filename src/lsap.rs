//! The one-shot linear sum assignment solver.

use crate::{CostMatrix, augment::augment, errors::LsapError, state::Solution};

/// Solves the linear sum assignment problem on `cost`.
///
/// Returns `(row_indices, col_indices)` of equal length `min(num_rows,
/// num_cols)`, such that assigning `row_indices[k]` to `col_indices[k]`
/// for every `k` minimizes (or, if `maximize` is set, maximizes) total
/// cost over the matched rows and columns.
///
/// # Errors
///
/// Returns [`LsapError::Infeasible`] if no complete assignment of the
/// smaller side exists (some row, or column if transposed, has no
/// finite-cost partner).
pub fn solve(cost: &CostMatrix, maximize: bool) -> Result<(Vec<usize>, Vec<usize>), LsapError> {
    let solution = solve_with_duals(cost, maximize)?;
    if cost.num_rows() <= cost.num_cols() {
        let rows: Vec<usize> = (0..solution.col4row.len()).collect();
        let cols: Vec<usize> = solution
            .col4row
            .into_iter()
            .map(|col| col.expect("every row is matched when num_rows <= num_cols"))
            .collect();
        Ok((rows, cols))
    } else {
        let mut pairs: Vec<(usize, usize)> = solution
            .row4col
            .into_iter()
            .enumerate()
            .map(|(col, row)| {
                (
                    row.expect("every column is matched when num_rows > num_cols"),
                    col,
                )
            })
            .collect();
        pairs.sort_unstable_by_key(|&(row, _)| row);
        Ok(pairs.into_iter().unzip())
    }
}

/// Solves the linear sum assignment problem on `cost`, returning the
/// full [`Solution`] (assignment plus dual potentials).
///
/// If `cost` has more rows than columns, the problem is transposed
/// before solving and the result transposed back, so that the
/// augmenting-path search itself always runs with `rows <= cols`.
///
/// # Errors
///
/// Returns [`LsapError::Infeasible`] if no complete assignment of the
/// smaller side exists.
pub fn solve_with_duals(cost: &CostMatrix, maximize: bool) -> Result<Solution, LsapError> {
    cost.validate()?;

    if cost.num_rows() > cost.num_cols() {
        let transposed = cost.transpose();
        let solution = solve_with_duals(&transposed, maximize)?;
        return Ok(transpose_solution(solution));
    }

    let sign = if maximize { -1.0 } else { 1.0 };
    let data: Vec<f64> = (0..cost.num_rows() * cost.num_cols())
        .map(|index| {
            let value = cost.get(index / cost.num_cols(), index % cost.num_cols());
            // A forbidden entry stays forbidden under negation: flipping
            // the sign of a genuine cost is what `maximize` means, but
            // `+inf` is a marker, not a price, and must not become the
            // most attractive entry in the matrix.
            if value.is_infinite() { value } else { sign * value }
        })
        .collect();

    solve_flat(&data, cost.num_rows(), cost.num_cols(), sign)
}

/// Runs the augmenting-path search row by row over a (possibly sign-
/// flipped) flat cost matrix with `nrows <= ncols`, then un-flips `u`/`v`
/// back to the caller's original cost scale.
pub(crate) fn solve_flat(
    data: &[f64],
    nrows: usize,
    ncols: usize,
    sign: f64,
) -> Result<Solution, LsapError> {
    let mut u = vec![0.0; nrows];
    let mut v = vec![0.0; ncols];
    let mut col4row: Vec<Option<usize>> = vec![None; nrows];
    let mut row4col: Vec<Option<usize>> = vec![None; ncols];

    for row in 0..nrows {
        augment(row, data, ncols, &mut u, &mut v, &mut col4row, &mut row4col)?;
    }

    Ok(Solution {
        col4row,
        row4col,
        u: u.into_iter().map(|value| sign * value).collect(),
        v: v.into_iter().map(|value| sign * value).collect(),
    })
}

/// Transposes a [`Solution`] computed for `cost.transpose()` back into
/// the row/column convention of the original (non-transposed) `cost`.
fn transpose_solution(solution: Solution) -> Solution {
    Solution {
        col4row: solution.row4col,
        row4col: solution.col4row,
        u: solution.v,
        v: solution.u,
    }
}
