//! Per-row cost ranking and the potential-column-set heuristic used to
//! prune the all-pairs constrained assignment driver's fallback search.

use std::collections::HashSet;

use crate::CostMatrix;

/// The cheapest, second-cheapest and third-cheapest columns for a
/// single row, in ascending cost order.
///
/// Ties are broken by column index (the lower index ranks first),
/// which keeps [`rank_row`] deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RowRanking {
    pub(crate) best: usize,
    pub(crate) best_cost: f64,
    pub(crate) second: Option<usize>,
    pub(crate) second_cost: f64,
    pub(crate) third: Option<usize>,
    pub(crate) third_cost: f64,
}

/// Ranks the columns of `row` by ascending cost, keeping only the three
/// cheapest.
///
/// # Panics
///
/// Panics if `cost.num_cols() == 0` (ruled out by [`CostMatrix`]'s own
/// constructors).
pub(crate) fn rank_row(cost: &CostMatrix, row: usize) -> RowRanking {
    let mut best = (0usize, f64::INFINITY);
    let mut second = (0usize, f64::INFINITY);
    let mut third = (0usize, f64::INFINITY);

    for col in 0..cost.num_cols() {
        let value = cost.get(row, col);
        if value < best.1 {
            third = second;
            second = best;
            best = (col, value);
        } else if value < second.1 {
            third = second;
            second = (col, value);
        } else if value < third.1 {
            third = (col, value);
        }
    }

    RowRanking {
        best: best.0,
        best_cost: best.1,
        second: second.1.is_finite().then_some(second.0),
        second_cost: second.1,
        third: third.1.is_finite().then_some(third.0),
        third_cost: third.1,
    }
}

/// The potential column set `P` (spec.md §3): the union of `col4row`
/// with, for each row, the lowest-cost column not currently in
/// `col4row`.
///
/// The all-pairs constrained driver only needs an exact answer for
/// `(row, col)` pairs where `col` is a realistic competitor for `row`;
/// every column outside `P` is dominated, for every row, by some column
/// already in `col4row` or by that row's own cheapest unused column, so
/// restricting expensive fallback computation to this set is what makes
/// the driver sub-quadratic in practice. (The current driver in
/// [`crate::clap`] computes this set for completeness and testing but
/// does not yet restrict its fallback search to it — see that module's
/// documentation.)
///
/// `col4row` must have one entry per row of `cost`.
pub(crate) fn potential_columns(cost: &CostMatrix, col4row: &[Option<usize>]) -> Vec<bool> {
    let used: HashSet<usize> = col4row.iter().flatten().copied().collect();

    let mut potential = vec![false; cost.num_cols()];
    for &col in &used {
        potential[col] = true;
    }

    for row in 0..cost.num_rows() {
        let ranking = rank_row(cost, row);
        // The row's top three are a cheap starting point for "the
        // cheapest column not in col4row": at most one of `col4row`'s
        // entries can coincide with each of them, so if any is free it
        // is already the row's cheapest unused column.
        let from_ranking = [Some(ranking.best), ranking.second, ranking.third]
            .into_iter()
            .flatten()
            .find(|col| !used.contains(col));
        let cheapest_unused = from_ranking.or_else(|| {
            (0..cost.num_cols())
                .filter(|col| !used.contains(col))
                .min_by(|&a, &b| cost.get(row, a).total_cmp(&cost.get(row, b)))
        });
        if let Some(col) = cheapest_unused {
            potential[col] = true;
        }
    }
    potential
}
