//! The shortest-augmenting-path step shared by every solver in this
//! crate.
//!
//! [`augment`] finds an augmenting path from a single free row to some
//! column (assigned or not) via a Dijkstra-style search over reduced
//! costs, then updates the dual potentials and the `col4row`/`row4col`
//! bookkeeping in place. A one-shot solve ([`crate::lsap::solve`]) calls
//! it once per row starting from all-zero duals and an empty
//! assignment; the incremental re-solvers ([`crate::incremental`]) call
//! it starting from a prior optimal solution, which is what lets them
//! finish in a single augmentation instead of a full re-solve.

use std::cmp::Ordering;

use crate::{errors::LsapError, traits::Number};

/// Finds an augmenting path starting at free row `row` and folds it
/// into `u`, `v`, `col4row` and `row4col`.
///
/// `cost` is a row-major `nrows * ncols` slice. `u` has one entry per
/// row, `v` and `row4col` one per column, `col4row` one per row.
/// `col4row[row]` may already be `Some` (the incremental re-solvers
/// reuse a row whose previous partner was stolen); every other row
/// referenced transitively through the search must already be assigned.
///
/// # Errors
///
/// Returns [`LsapError::Infeasible`] if no column is reachable from
/// `row` at finite cost.
pub(crate) fn augment<T: Number>(
    row: usize,
    cost: &[T],
    ncols: usize,
    u: &mut [T],
    v: &mut [T],
    col4row: &mut [Option<usize>],
    row4col: &mut [Option<usize>],
) -> Result<(), LsapError> {
    let get = |r: usize, c: usize| cost[r * ncols + c];

    let mut scanned_rows: Vec<usize> = Vec::new();
    let mut scanned_cols: Vec<usize> = Vec::new();
    let mut remaining: Vec<usize> = (0..ncols).collect();
    let mut shortest_path_cost = vec![T::infinity(); ncols];
    let mut predecessor: Vec<Option<usize>> = vec![None; ncols];

    let mut min_val = T::zero();
    let mut current_row = row;

    let sink = loop {
        scanned_rows.push(current_row);

        let mut lowest = T::infinity();
        let mut best_index = None;
        let mut best_is_unassigned = false;

        for (index, &j) in remaining.iter().enumerate() {
            let reduced = min_val + get(current_row, j) - u[current_row] - v[j];
            if reduced < shortest_path_cost[j] {
                predecessor[j] = Some(current_row);
                shortest_path_cost[j] = reduced;
            }
            let unassigned = row4col[j].is_none();
            let takes_over = match shortest_path_cost[j].total_cmp(&lowest) {
                Ordering::Less => true,
                // Tie-break towards an unassigned column: with several
                // zero-slack edges tied for shortest, preferring the sink
                // candidate over one that would keep the search going is
                // what guarantees the path reaches a sink on this pass
                // instead of cycling through equally-short assigned
                // columns.
                Ordering::Equal => unassigned && !best_is_unassigned,
                Ordering::Greater => false,
            };
            if takes_over {
                lowest = shortest_path_cost[j];
                best_index = Some(index);
                best_is_unassigned = unassigned;
            }
        }

        let Some(index) = best_index else {
            return Err(LsapError::Infeasible);
        };
        min_val = lowest;
        if min_val.is_infinite() {
            return Err(LsapError::Infeasible);
        }

        let j_star = remaining.remove(index);
        scanned_cols.push(j_star);

        match row4col[j_star] {
            None => break j_star,
            Some(next_row) => current_row = next_row,
        }
    };

    u[row] += min_val;
    for &r in &scanned_rows {
        if r != row {
            let assigned_col = col4row[r].expect("a scanned non-source row is already assigned");
            u[r] += min_val - shortest_path_cost[assigned_col];
        }
    }
    for &j in &scanned_cols {
        v[j] += shortest_path_cost[j] - min_val;
    }

    let mut j = sink;
    loop {
        let i = predecessor[j].expect("every scanned column has a predecessor row");
        row4col[j] = Some(i);
        let previous = col4row[i];
        col4row[i] = Some(j);
        if i == row {
            break;
        }
        j = previous.expect("a non-source row on the augmenting path is already assigned");
    }

    Ok(())
}
