//! LT row construction and LT encoding (spec §4.3/§4.11).
//!
//! Two related but distinct operations live here, matching the original
//! implementation's own split between `lt_row` (builds a bit-vector for
//! matrix `A`) and `ltenc` (XORs intermediate symbol *payloads* together):
//! `lt_row` *marks* referenced columns (idempotent `set(b, true)`), while
//! `encode_payload` XORs the referenced payloads, so a column referenced an
//! even number of times cancels out of the payload but still reads as a
//! single set bit in the matrix row. This mirrors the original source
//! faithfully rather than "fixing" what looks like a discrepancy — the two
//! representations answer different questions (which columns does this
//! row use at all, vs. what is the symbol's bit pattern).

use crate::bitmatrix::BitRow;
use crate::params::Params;
use crate::tables::RaptorTables;
use crate::triple::triple;

/// Advances `b` by `a` (mod `l_prime`) until it lands inside `[0, l)`.
fn advance_into_range(mut b: u32, a: u32, l: u32, l_prime: u32) -> u32 {
    while b >= l {
        b = (b + a) % l_prime;
    }
    b
}

/// Column indices referenced by the LT triple for `esi`, in generation
/// order (may contain repeats).
fn referenced_columns(esi: u64, params: &Params, tables: &dyn RaptorTables) -> Vec<usize> {
    let t = triple(esi, params, tables);
    let l = params.l;
    let l_prime = params.l_prime;

    let mut b = advance_into_range(t.b, t.a, l, l_prime);
    let degree = (t.d as u32).min(l) as usize;
    let mut cols = Vec::with_capacity(degree);
    cols.push(b as usize);

    for _ in 1..degree {
        b = (b + t.a) % l_prime;
        b = advance_into_range(b, t.a, l, l_prime);
        cols.push(b as usize);
    }
    cols
}

/// Builds the LT row of length `L` for encoding symbol `esi` (spec §4.3).
/// Duplicate column references are idempotent here: the row records
/// "this column participates", not how many times.
pub fn lt_row(esi: u64, params: &Params, tables: &dyn RaptorTables) -> BitRow {
    let mut row = BitRow::new(params.l as usize);
    for col in referenced_columns(esi, params, tables) {
        row.set(col, true);
    }
    row
}

/// Produces the payload for encoding symbol `esi` by XORing the referenced
/// intermediate symbols together (spec §4.11). A column referenced an even
/// number of times contributes nothing, matching true XOR arithmetic.
pub fn encode_payload(
    esi: u64,
    params: &Params,
    tables: &dyn RaptorTables,
    intermediate: &[Vec<u8>],
) -> Vec<u8> {
    let mut cols = referenced_columns(esi, params, tables).into_iter();
    let first = cols.next().expect("degree is always >= 1");
    let mut result = intermediate[first].clone();
    for col in cols {
        xor_into(&mut result, &intermediate[col]);
    }
    result
}

fn xor_into(target: &mut [u8], source: &[u8]) {
    debug_assert_eq!(target.len(), source.len());
    for (t, s) in target.iter_mut().zip(source.iter()) {
        *t ^= s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::DefaultTables;

    #[test]
    fn row_has_at_least_one_bit() {
        let params = crate::params::derive(10, &DefaultTables).unwrap();
        for esi in 0..50u64 {
            let row = lt_row(esi, &params, &DefaultTables);
            assert!(row.popcount() >= 1);
            assert_eq!(row.len(), params.l as usize);
        }
    }

    #[test]
    fn encode_is_deterministic() {
        let params = crate::params::derive(10, &DefaultTables).unwrap();
        let intermediate: Vec<Vec<u8>> =
            (0..params.l).map(|i| vec![i as u8; 4]).collect();
        let p1 = encode_payload(7, &params, &DefaultTables, &intermediate);
        let p2 = encode_payload(7, &params, &DefaultTables, &intermediate);
        assert_eq!(p1, p2);
    }
}
