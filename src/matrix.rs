//! Matrix `A` assembly (spec §4.6): LDPC rows, then HDPC rows, then one LT
//! row per received symbol, in insertion order.

use crate::bitmatrix::BitMatrix;
use crate::hdpc::hdpc_rows;
use crate::ldpc::ldpc_rows;
use crate::lt::lt_row;
use crate::params::Params;
use crate::tables::RaptorTables;

/// Assembles matrix `A` for the received symbols, identified by `esis` in
/// the order they were received. Row regions: LDPC `[0, S)`, HDPC `[S,
/// S+H)`, LT `[S+H, S+H+N)`.
pub fn assemble(params: &Params, tables: &dyn RaptorTables, esis: &[u64]) -> BitMatrix {
    let mut rows = ldpc_rows(params);
    rows.extend(hdpc_rows(params, tables));
    rows.extend(esis.iter().map(|&esi| lt_row(esi, params, tables)));

    BitMatrix::new(rows, params.l as usize)
}
