//! Main solver (spec §4.9): reduces matrix `A` to the `L x L` identity in
//! four phases, recording every row-XOR and row/column swap into a
//! [`Schedule`]. This is the core of the crate — see spec.md §4.9 for the
//! full phase-by-phase description this module implements line for line.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, error, trace, warn};

use crate::bitmatrix::BitMatrix;
use crate::error::DecodingScheduleError;
use crate::params::Params;
use crate::prepass::prepass;
use crate::schedule::Schedule;

/// Runs the full decoding-schedule algorithm against `matrix`, recording
/// every operation into a fresh [`Schedule`]. On success `matrix`'s first
/// `L` rows are the `L x L` identity.
pub fn solve(
    matrix: &mut BitMatrix,
    params: &Params,
    use_prepass: bool,
) -> Result<Schedule, DecodingScheduleError> {
    let l = params.l as usize;
    let m = matrix.rows();
    let mut schedule = Schedule::new(l, m);

    let mut o_degrees: Vec<usize> = (0..m).map(|r| matrix.row(r).popcount()).collect();

    if use_prepass {
        let before: usize = o_degrees.iter().sum();
        prepass(matrix, &mut schedule);
        let after: usize = (0..m).map(|r| matrix.row(r).popcount()).sum();
        if after == before {
            warn!("prepass made no reduction over {m} rows");
        } else {
            debug!("prepass reduced total row weight from {before} to {after}");
        }
    }

    let (i, u) = phase_one(matrix, &mut o_degrees, &mut schedule, l, m)?;
    phase_two(matrix, &mut o_degrees, &mut schedule, l, u, m)?;
    phase_three(matrix, &mut schedule, i, l, u);
    phase_four(matrix, &mut schedule, i, l, u);

    debug!("decoding schedule complete: {} xors over {m} rows, l={l}", schedule.xors().len());
    Ok(schedule)
}

fn exchange_row(
    matrix: &mut BitMatrix,
    o_degrees: &mut [usize],
    schedule: &mut Schedule,
    r1: usize,
    r2: usize,
) {
    matrix.swap_rows(r1, r2);
    o_degrees.swap(r1, r2);
    schedule.exchange_row(r1, r2);
    trace!("swap_row {r1} <-> {r2}");
}

fn exchange_column(matrix: &mut BitMatrix, schedule: &mut Schedule, c1: usize, c2: usize) {
    matrix.swap_columns(c1, c2);
    schedule.exchange_column(c1, c2);
    trace!("swap_column {c1} <-> {c2}");
}

fn xor_row(matrix: &mut BitMatrix, schedule: &mut Schedule, target: usize, source: usize) {
    matrix.xor_row_into(target, source);
    schedule.xor_row(target, source);
    trace!("xor row {target} ^= row {source}");
}

/// Minimum popcount `r > 0` among rows `[i, m)` restricted to columns
/// `[i, l-u)`, and the rows achieving it. `None` if every such row is zero.
fn rows_with_min_r(
    matrix: &BitMatrix,
    i: usize,
    u: usize,
    l: usize,
    m: usize,
) -> (Option<usize>, Vec<usize>) {
    let mut min_r: Option<usize> = None;
    let mut rows = Vec::new();
    for row_idx in i..m {
        let r = matrix.row(row_idx).popcount_range(i, l - u);
        if r == 0 {
            continue;
        }
        match min_r {
            None => {
                min_r = Some(r);
                rows = vec![row_idx];
            }
            Some(mr) if r < mr => {
                min_r = Some(r);
                rows = vec![row_idx];
            }
            Some(mr) if r == mr => rows.push(row_idx),
            _ => {}
        }
    }
    (min_r, rows)
}

fn min_degree_row(o_degrees: &[usize], rows_with_r: &[usize]) -> usize {
    *rows_with_r.iter().min_by_key(|&&r| o_degrees[r]).unwrap()
}

/// Degree-2 tie-break (spec §4.9, §9 design notes): treats each candidate
/// row as an edge between the two columns it has ones in, builds connected
/// components with a union-find, and returns the row for any edge of a
/// maximum-edge-count component.
fn row_from_graph(matrix: &BitMatrix, i: usize, l: usize, u: usize, rows_with_r: &[usize]) -> usize {
    let mut parent: BTreeMap<usize, usize> = BTreeMap::new();

    fn find(parent: &mut BTreeMap<usize, usize>, x: usize) -> usize {
        let p = *parent.entry(x).or_insert(x);
        if p == x {
            x
        } else {
            let root = find(parent, p);
            parent.insert(x, root);
            root
        }
    }

    let mut edges: Vec<(usize, usize, usize)> = Vec::with_capacity(rows_with_r.len());
    for &row in rows_with_r {
        let cols = matrix.row(row).ones_in_range(i, l - u);
        debug_assert_eq!(cols.len(), 2, "row {row} does not have exactly 2 ones in v");
        edges.push((cols[0], cols[1], row));
    }

    for &(v1, v2, _) in &edges {
        let r1 = find(&mut parent, v1);
        let r2 = find(&mut parent, v2);
        if r1 != r2 {
            parent.insert(r1, r2);
        }
    }

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &(v1, _v2, _row) in &edges {
        let root = find(&mut parent, v1);
        *counts.entry(root).or_insert(0) += 1;
    }
    let max_count = *counts.values().max().unwrap();

    // First edge, in candidate-row order, whose component reaches the
    // maximum edge count: a stable choice, per spec §9.
    for &(v1, _v2, row) in &edges {
        let root = find(&mut parent, v1);
        if counts[&root] == max_count {
            return row;
        }
    }
    unreachable!("at least one edge belongs to the max-count component")
}

/// Phase I (spec §4.9): shrinks `V` until `i + u == L`. Returns the final
/// `(i, u)`.
fn phase_one(
    matrix: &mut BitMatrix,
    o_degrees: &mut [usize],
    schedule: &mut Schedule,
    l: usize,
    m: usize,
) -> Result<(usize, usize), DecodingScheduleError> {
    let mut i = 0usize;
    let mut u = 0usize;

    while i + u < l {
        let (r, rows_with_r) = rows_with_min_r(matrix, i, u, l, m);
        let r = r.ok_or_else(|| {
            error!("phase I: no nonzero row in V at i={i}, u={u}");
            DecodingScheduleError::new("No nonzero row to choose from v")
        })?;

        let chosen_row = if r == 2 {
            row_from_graph(matrix, i, l, u, &rows_with_r)
        } else {
            min_degree_row(o_degrees, &rows_with_r)
        };

        exchange_row(matrix, o_degrees, schedule, i, chosen_row);

        // Column alignment: put a 1 at A[i][i], push the remaining (r-1)
        // ones of row i to the rightmost columns of V.
        let mut ones: BTreeSet<usize> = matrix.row(i).ones_in_range(i, l - u).into_iter().collect();
        if !matrix.row(i).get(i) {
            let col = *ones.iter().next().unwrap();
            ones.remove(&col);
            exchange_column(matrix, schedule, i, col);
        } else {
            ones.remove(&i);
        }

        let mut col = l - u - 1;
        while col > i && !ones.is_empty() {
            if !matrix.row(i).get(col) {
                let other = *ones.iter().next().unwrap();
                ones.remove(&other);
                exchange_column(matrix, schedule, col, other);
            } else {
                ones.remove(&col);
            }
            col -= 1;
        }

        for row_idx in (i + 1)..m {
            if matrix.row(row_idx).get(i) {
                xor_row(matrix, schedule, row_idx, i);
            }
        }

        debug!("phase I: i={i} u={u} r={r} row={chosen_row}");
        i += 1;
        u += r - 1;
    }

    Ok((i, u))
}

/// Phase II (spec §4.9): eliminates `U_lower` to the identity.
fn phase_two(
    matrix: &mut BitMatrix,
    o_degrees: &mut [usize],
    schedule: &mut Schedule,
    l: usize,
    u: usize,
    m: usize,
) -> Result<(), DecodingScheduleError> {
    for col in (l - u)..l {
        if !matrix.row(col).get(col) {
            let found = (col + 1..m).find(|&row| matrix.row(row).get(col));
            match found {
                Some(row) => exchange_row(matrix, o_degrees, schedule, col, row),
                None => {
                    error!("phase II: U_lower has insufficient rank at column {col}");
                    return Err(DecodingScheduleError::new("U lower is of less rank than u"));
                }
            }
        }

        for row in (col + 1)..m {
            if matrix.row(row).get(col) {
                xor_row(matrix, schedule, row, col);
            }
        }
    }
    Ok(())
}

/// Phase III (spec §4.9): clears above the diagonal in the `U` block.
fn phase_three(matrix: &mut BitMatrix, schedule: &mut Schedule, i: usize, l: usize, u: usize) {
    let mut column = l;
    while column > l - u {
        column -= 1;
        for row in i..column {
            if matrix.row(row).get(column) {
                xor_row(matrix, schedule, row, column);
            }
        }
    }
}

/// Phase IV (spec §4.9): clears `U_upper` in the top `i` rows.
fn phase_four(matrix: &mut BitMatrix, schedule: &mut Schedule, i: usize, l: usize, u: usize) {
    for row in 0..i {
        for column in (l - u)..l {
            if matrix.row(row).get(column) {
                xor_row(matrix, schedule, row, column);
            }
        }
    }
}
