//! Deterministic `(d, a, b)` triple for an ESI (spec §4.2).

use crate::params::Params;
use crate::tables::RaptorTables;

const Q: u32 = 65521;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    pub d: u8,
    pub a: u32,
    pub b: u32,
}

/// Computes `(d, a, b)` for encoding symbol `id`, a pure function of `id`
/// and `params.systematic_index`.
pub fn triple(id: u64, params: &Params, tables: &dyn RaptorTables) -> Triple {
    let sys = params.systematic_index as u64;
    let a_prime = ((53591 + sys * 997) % Q as u64) as u32;
    let b_prime = ((10267 * (sys + 1)) % Q as u64) as u32;
    let y = (((b_prime as u64) + id * (a_prime as u64)) % Q as u64) as u32;

    let v = tables.r10(y, 0, 1 << 20);
    let d = tables.degree(v);
    let a = 1 + tables.r10(y, 1, params.l_prime - 1);
    let b = tables.r10(y, 2, params.l_prime);

    Triple { d, a, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::DefaultTables;

    #[test]
    fn bounds_hold_for_every_esi() {
        let params = crate::params::derive(10, &DefaultTables).unwrap();
        for id in 0..500u64 {
            let t = triple(id, &params, &DefaultTables);
            assert!(t.a >= 1 && t.a <= params.l_prime - 1);
            assert!(t.b <= params.l_prime - 1);
            assert!((1..=40).contains(&t.d));
        }
    }

    #[test]
    fn is_a_pure_function_of_id() {
        let params = crate::params::derive(10, &DefaultTables).unwrap();
        let t1 = triple(42, &params, &DefaultTables);
        let t2 = triple(42, &params, &DefaultTables);
        assert_eq!(t1, t2);
    }
}
