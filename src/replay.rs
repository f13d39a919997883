//! Intermediate-symbol replay (spec §4.10): applies a schedule's XORs over
//! actual payload buffers to produce the `L` intermediate symbols.
//!
//! Row swaps are never replayed here: [`Schedule::xor_row`] already records
//! each XOR in buffer-frame indices (translated through the row permutation
//! at the moment it was recorded), so applying `schedule.xors()` straight to
//! the untouched payload buffer `d` is correct on its own; only `c`/`d`
//! still need the accumulated permutations.

use crate::params::Params;
use crate::schedule::Schedule;

/// Replays `schedule` over the received payloads (in original insertion
/// order) to produce the `L` intermediate symbols, each `w` bytes.
///
/// `received` must be in the same order the symbols were assembled into
/// matrix `A` (i.e. the LT row order), and every payload must be `w` bytes.
pub fn replay(schedule: &Schedule, params: &Params, received: &[Vec<u8>], w: usize) -> Vec<Vec<u8>> {
    let prefix = (params.s + params.h) as usize;
    let m = prefix + received.len();

    let mut d: Vec<Vec<u8>> = Vec::with_capacity(m);
    d.extend(std::iter::repeat(vec![0u8; w]).take(prefix));
    d.extend(received.iter().cloned());

    for &(source, target) in &schedule.xors() {
        let src = d[source].clone();
        xor_into(&mut d[target], &src);
    }

    let l = params.l as usize;
    let mut intermediate: Vec<Vec<u8>> = vec![Vec::new(); l];
    let c = schedule.c();
    let row_map = schedule.d();
    for p in 0..l {
        intermediate[c[p]] = d[row_map[p]].clone();
    }
    intermediate
}

fn xor_into(target: &mut [u8], source: &[u8]) {
    for (t, s) in target.iter_mut().zip(source.iter()) {
        *t ^= s;
    }
}
