//! LDPC precode rows (spec §4.4): `S x K` section, three ones per column,
//! assembled with an `S x S` identity and an `S x H` zero block.

use crate::bitmatrix::BitRow;
use crate::params::Params;

/// Builds the `S` LDPC rows, each of length `L`: columns `[0, K)` hold the
/// LDPC pattern, columns `[K, K+S)` hold the identity, columns `[K+S, L)`
/// are zero.
pub fn ldpc_rows(params: &Params) -> Vec<BitRow> {
    let k = params.k as usize;
    let s = params.s as usize;
    let l = params.l as usize;

    let mut rows: Vec<BitRow> = (0..s).map(|_| BitRow::new(l)).collect();

    for i in 0..k {
        let a = 1 + ((i / s) % (s - 1));
        let mut b = i % s;
        rows[b].set(i, true);
        b = (b + a) % s;
        rows[b].set(i, true);
        b = (b + a) % s;
        rows[b].set(i, true);
    }

    for row_idx in 0..s {
        rows[row_idx].set(k + row_idx, true);
    }

    rows
}
