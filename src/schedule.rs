//! Schedule recorder (spec §4.7): an append-only log of row-XORs,
//! row-swaps, and column-swaps, from which the final column-to-symbol
//! (`c`) and row-to-payload-buffer (`d`) maps are derived.
//!
//! XORs are recorded in *buffer-frame* indices, not physical row indices:
//! `xor_row(target, source)` is called with the solver's current physical
//! row numbers, but translates them through the row permutation accumulated
//! so far before logging the op. This mirrors the original implementation
//! and is what lets `replay()` apply the log straight to the untouched
//! payload buffer, with no row swaps to replay and no physical/buffer index
//! confusion: by the time an XOR is recorded, `target`/`source` already
//! name the payload slots it actually operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOp {
    Xor { source: usize, target: usize },
    SwapRow { r1: usize, r2: usize },
    SwapColumn { c1: usize, c2: usize },
}

#[derive(Debug, Clone)]
pub struct Schedule {
    ops: Vec<ScheduleOp>,
    row_perm: Vec<usize>,
    col_perm: Vec<usize>,
    l: usize,
}

impl Schedule {
    pub fn new(l: usize, m: usize) -> Self {
        Self {
            ops: Vec::new(),
            row_perm: (0..m).collect(),
            col_perm: (0..l).collect(),
            l,
        }
    }

    /// Records `target ^= source`, given the *physical* row indices the
    /// solver is currently looking at. Translates both through the row
    /// permutation accumulated so far, so the logged op names the buffer
    /// slots the data actually lives in, not its current physical position.
    /// Does not perform the XOR itself; the caller mutates the matrix and
    /// the schedule in the same step.
    pub fn xor_row(&mut self, target: usize, source: usize) {
        self.ops.push(ScheduleOp::Xor {
            source: self.row_perm[source],
            target: self.row_perm[target],
        });
    }

    pub fn exchange_row(&mut self, r1: usize, r2: usize) {
        self.row_perm.swap(r1, r2);
        self.ops.push(ScheduleOp::SwapRow { r1, r2 });
    }

    pub fn exchange_column(&mut self, c1: usize, c2: usize) {
        self.col_perm.swap(c1, c2);
        self.ops.push(ScheduleOp::SwapColumn { c1, c2 });
    }

    pub fn ops(&self) -> &[ScheduleOp] {
        &self.ops
    }

    /// `xors` in execution order: `(source_row, target_row)` pairs.
    pub fn xors(&self) -> Vec<(usize, usize)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                ScheduleOp::Xor { source, target } => Some((source, target)),
                _ => None,
            })
            .collect()
    }

    /// Final column-to-intermediate-symbol map, `c[0..L)`.
    pub fn c(&self) -> &[usize] {
        &self.col_perm[..self.l]
    }

    /// Final row-to-payload-buffer map, `d[0..L)`.
    pub fn d(&self) -> &[usize] {
        &self.row_perm[..self.l]
    }
}
