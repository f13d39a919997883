//! Prepass optimiser (spec §4.8): a single greedy pass over unordered row
//! pairs, XORing in rows that shrink a denser neighbour by more than the
//! XOR cost, before the main solver runs.

use crate::bitmatrix::BitMatrix;
use crate::schedule::Schedule;

/// Single pass over row pairs `(i, j)`, `i < j`: if XORing row `i` into row
/// `j` would drop its popcount by more than 2, performs and records the
/// XOR. Never increases the rank of `A` (spec §4.8).
pub fn prepass(matrix: &mut BitMatrix, schedule: &mut Schedule) {
    let rows = matrix.rows();
    for i in 0..rows {
        for j in (i + 1)..rows {
            let count = matrix.row(j).popcount();
            let candidate = matrix.row(i).xor(matrix.row(j));
            if candidate.popcount() + 2 < count {
                matrix.xor_row_into(j, i);
                schedule.xor_row(j, i);
            }
        }
    }
}
