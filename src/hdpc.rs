//! HDPC precode rows (spec §4.5): `H x (K+S)` section built from the Gray
//! sequence, assembled with an `H x H` identity block.

use crate::bitmatrix::BitRow;
use crate::params::Params;
use crate::tables::RaptorTables;

fn bit_is_set(n: u32, value: u32) -> bool {
    (value >> n) & 1 != 0
}

/// Builds the `H` HDPC rows, each of length `L`: columns `[0, K+S)` come
/// from bit `h` of `GraySequence[H'][j]`, columns `[K+S, L)` hold the
/// identity.
pub fn hdpc_rows(params: &Params, tables: &dyn RaptorTables) -> Vec<BitRow> {
    let k_plus_s = (params.k + params.s) as usize;
    let h = params.h as usize;
    let l = params.l as usize;

    let mut rows: Vec<BitRow> = (0..h).map(|_| BitRow::new(l)).collect();

    for (hrow, row) in rows.iter_mut().enumerate() {
        for j in 0..k_plus_s {
            let value = tables.gray(params.h_prime, j as u32);
            if bit_is_set(hrow as u32, value) {
                row.set(j, true);
            }
        }
    }

    for row_idx in 0..h {
        rows[row_idx].set(k_plus_s + row_idx, true);
    }

    rows
}
