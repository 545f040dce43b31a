//! Re-solving a linear sum assignment problem after a single row or
//! column is logically removed, reusing the dual potentials of a prior
//! [`Solution`] instead of solving from scratch.
//!
//! Dropping a row does not always leave the remaining rows' assignment
//! optimal: the row that held the now-freed column might have been the
//! only thing keeping some other row from preferring it instead (and
//! that row's own column might in turn be wanted by a third row, and so
//! on). [`solve_with_removed_row`] checks a cheap fast-path condition
//! first — does any other row strictly prefer the freed column to its
//! own? — and only re-augments when that check fails. Dropping a column
//! always disturbs the row that was assigned to it, if any;
//! [`solve_with_removed_col`] re-augments that single row over the
//! column-reduced matrix.

use crate::{CostMatrix, augment::augment, errors::LsapError, lsap::solve_with_duals, state::Solution};

/// Returns the solution to the sub-problem obtained by deleting row
/// `removed_row` from both `cost` and `solution`.
///
/// `solution` must be the (optimal) [`Solution`] for `cost` as it
/// stood before the removal. If `modify_in_place` is set, `solution` is
/// updated to match the returned value; otherwise it is left untouched
/// and the new sub-problem's solution is returned as a fresh value.
///
/// Row indices greater than `removed_row` shift down by one, matching
/// the convention of deleting an element from a `Vec`; the returned
/// solution is indexed against `cost.without_row(removed_row)`, not
/// `cost`.
pub fn solve_with_removed_row(
    solution: &mut Solution,
    cost: &CostMatrix,
    removed_row: usize,
    modify_in_place: bool,
) -> Solution {
    let updated = remove_row(cost, solution, removed_row);
    if modify_in_place {
        *solution = updated.clone();
    }
    updated
}

fn remove_row(cost: &CostMatrix, solution: &Solution, removed_row: usize) -> Solution {
    let other_rows_all_assigned = solution
        .col4row
        .iter()
        .enumerate()
        .all(|(row, col)| row == removed_row || col.is_some());

    if !other_rows_all_assigned {
        // Some row besides `removed_row` was already unmatched (only
        // possible when `cost` has more rows than columns). Deleting a
        // row changes how many rows the reduced problem can afford to
        // leave idle, which the fast/slow-path check below can't
        // capture (it only reasons about the single column `removed_row`
        // frees), so fall back to solving the reduced problem outright.
        return exact_resolve(cost, removed_row);
    }

    let Some(freed_col) = solution.col4row[removed_row] else {
        return bookkeeping_only(solution, removed_row);
    };

    let some_row_prefers_freed_col = solution.col4row.iter().enumerate().any(|(row, &col)| {
        row != removed_row
            && col.is_some_and(|own_col| cost.get(row, freed_col) < cost.get(row, own_col))
    });

    if !some_row_prefers_freed_col {
        return bookkeeping_only(solution, removed_row);
    }

    reaugment_after_row_removal(cost, solution, removed_row, freed_col)
}

/// Solves `cost.without_row(removed_row)` from scratch.
///
/// Used only when some row other than `removed_row` was already
/// unmatched, a case the restricted-submatrix trick below does not
/// cover. A sub-matrix of a feasible cost matrix is always feasible, so
/// this never fails.
fn exact_resolve(cost: &CostMatrix, removed_row: usize) -> Solution {
    let reduced = cost.without_row(removed_row);
    solve_with_duals(&reduced, false)
        .expect("dropping a row from a feasible matrix cannot make it infeasible")
}

/// Pure index bookkeeping: drop `removed_row` from every row-indexed
/// field and shift down the row indices above it. Valid whenever
/// removing the row doesn't require any other row to change columns.
fn bookkeeping_only(solution: &Solution, removed_row: usize) -> Solution {
    let freed_col = solution.col4row[removed_row];

    let mut col4row = solution.col4row.clone();
    col4row.remove(removed_row);

    let mut u = solution.u.clone();
    u.remove(removed_row);

    let row4col: Vec<Option<usize>> = solution
        .row4col
        .iter()
        .map(|&row| match row {
            Some(row) if row == removed_row => None,
            Some(row) if row > removed_row => Some(row - 1),
            other => other,
        })
        .collect();

    debug_assert!(
        freed_col.is_none_or(|col| row4col[col].is_none()),
        "the column previously held by the removed row must now be free"
    );

    Solution {
        col4row,
        row4col,
        u,
        v: solution.v.clone(),
    }
}

/// The slow path: re-augments over the `m x m` sub-matrix restricted to
/// the columns currently in `solution.col4row`, with `removed_row`'s own
/// costs zeroed out (its contribution is discarded regardless of which
/// column it nominally lands on) and its column marked free, then folds
/// the result back into the full state before shrinking `removed_row`
/// out.
///
/// Every row but `removed_row` keeps its own column as its starting
/// position in the restricted sub-matrix, so the sub-problem starts from
/// the identity permutation with exactly one free slot (`removed_row`'s)
/// — a single [`augment`] call from that slot finds the cheapest
/// cascade, if any.
fn reaugment_after_row_removal(
    cost: &CostMatrix,
    solution: &Solution,
    removed_row: usize,
    freed_col: usize,
) -> Solution {
    let m = solution.col4row.len();
    let used_columns: Vec<usize> = solution
        .col4row
        .iter()
        .map(|col| col.expect("other_rows_all_assigned guarantees every row is matched"))
        .collect();
    debug_assert_eq!(used_columns[removed_row], freed_col);

    // Re-establish dual feasibility for the zeroed row against every
    // column in `cost`, not just the `m` restricted ones, so the
    // returned duals stay a valid certificate for the whole reduced
    // matrix, not only the columns touched here.
    let u_virtual = solution.v.iter().fold(f64::INFINITY, |min, &v| min.min(-v));

    let mut sub_cost = vec![0.0; m * m];
    for row in 0..m {
        if row == removed_row {
            continue;
        }
        for (col_pos, &actual_col) in used_columns.iter().enumerate() {
            sub_cost[row * m + col_pos] = cost.get(row, actual_col);
        }
    }

    let mut sub_u = solution.u.clone();
    sub_u[removed_row] = u_virtual;
    let mut sub_v: Vec<f64> = used_columns.iter().map(|&col| solution.v[col]).collect();
    let mut sub_col4row: Vec<Option<usize>> = (0..m)
        .map(|row| if row == removed_row { None } else { Some(row) })
        .collect();
    let mut sub_row4col: Vec<Option<usize>> = (0..m)
        .map(|col_pos| if col_pos == removed_row { None } else { Some(col_pos) })
        .collect();

    augment(
        removed_row,
        &sub_cost,
        m,
        &mut sub_u,
        &mut sub_v,
        &mut sub_col4row,
        &mut sub_row4col,
    )
    .expect("the zeroed row has a finite-cost edge to every restricted column");

    let mut v = solution.v.clone();
    let mut row4col = solution.row4col.clone();
    for (col_pos, &actual_col) in used_columns.iter().enumerate() {
        v[actual_col] = sub_v[col_pos];
        row4col[actual_col] = sub_row4col[col_pos].filter(|&row| row != removed_row);
    }

    let mut col4row: Vec<Option<usize>> = (0..m)
        .map(|row| {
            let col_pos = sub_col4row[row]
                .expect("augment leaves every row in the restricted sub-problem assigned");
            used_columns[col_pos]
        })
        .map(Some)
        .collect();

    let mut u = solution.u.clone();
    for row in 0..m {
        if row != removed_row {
            u[row] = sub_u[row];
        }
    }

    col4row.remove(removed_row);
    u.remove(removed_row);
    let row4col: Vec<Option<usize>> = row4col
        .into_iter()
        .map(|row| match row {
            Some(row) if row == removed_row => None,
            Some(row) if row > removed_row => Some(row - 1),
            other => other,
        })
        .collect();

    Solution { col4row, row4col, u, v }
}

/// Returns the solution to the sub-problem obtained by deleting column
/// `removed_col` from both `cost` and `solution`.
///
/// `cost` must be the cost matrix that `solution` was computed for
/// (still including `removed_col`); `solution` must be its optimal
/// [`Solution`]. If `removed_col` was unassigned, this is pure
/// bookkeeping; otherwise the row it was assigned to is re-augmented
/// over `cost.without_col(removed_col)`, reusing every other row's
/// dual potential unchanged.
///
/// Column indices greater than `removed_col` shift down by one,
/// matching the convention of deleting an element from a `Vec`; the
/// returned solution is indexed against `cost.without_col(removed_col)`.
///
/// If `modify_in_place` is set, `solution` is updated to match the
/// returned value on success; on error it is left untouched.
///
/// If removing the column leaves fewer columns than rows, the row that
/// lost its column is left unmatched rather than re-augmented: once
/// columns are scarcer than rows, some row is always left over, and
/// this is the row removing `removed_col` naturally produces.
///
/// # Errors
///
/// Returns [`LsapError::Infeasible`] if the row that lost its column
/// has no other finite-cost column to augment to, and there were still
/// at least as many columns as rows left to search.
pub fn solve_with_removed_col(
    solution: &mut Solution,
    cost: &CostMatrix,
    removed_col: usize,
    modify_in_place: bool,
) -> Result<Solution, LsapError> {
    let updated = remove_col(solution, cost, removed_col)?;
    if modify_in_place {
        *solution = updated.clone();
    }
    Ok(updated)
}

fn remove_col(
    solution: &Solution,
    cost: &CostMatrix,
    removed_col: usize,
) -> Result<Solution, LsapError> {
    let stranded_row = solution.row4col[removed_col];

    let mut v = solution.v.clone();
    v.remove(removed_col);

    let mut row4col = solution.row4col.clone();
    row4col.remove(removed_col);

    let mut col4row: Vec<Option<usize>> = solution
        .col4row
        .iter()
        .map(|&col| match col {
            Some(col) if col == removed_col => None,
            Some(col) if col > removed_col => Some(col - 1),
            other => other,
        })
        .collect();

    let mut u = solution.u.clone();

    if let Some(row) = stranded_row {
        let reduced_cost = cost.without_col(removed_col);
        let nrows = col4row.len();
        let result = augment(
            row,
            reduced_cost.data(),
            reduced_cost.num_cols(),
            &mut u,
            &mut v,
            &mut col4row,
            &mut row4col,
        );
        match result {
            Ok(()) => {}
            // Once there are fewer columns than rows, some row is
            // always left unmatched; `row` simply becomes that row
            // rather than this being a genuine infeasibility.
            Err(LsapError::Infeasible) if reduced_cost.num_cols() < nrows => {
                col4row[row] = None;
            }
            Err(error) => return Err(error),
        }
    }

    Ok(Solution {
        col4row,
        row4col,
        u,
        v,
    })
}
