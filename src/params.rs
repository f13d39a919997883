//! R10 parameter derivation from `K` (spec §4.1).

use crate::error::ParameterError;
use crate::tables::RaptorTables;

pub const MIN_K: u32 = 4;
pub const MAX_K: u32 = 8192;

/// Immutable R10 parameters, derived once from `k` (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub k: u32,
    pub x: u32,
    pub s: u32,
    pub h: u32,
    pub h_prime: u32,
    pub l: u32,
    pub l_prime: u32,
    pub systematic_index: u32,
}

/// Smallest `n` such that `C(n, ceil(n/2)) >= target`.
fn smallest_h(target: u64) -> u32 {
    let mut h: u32 = 0;
    loop {
        let half = (h + 1) / 2;
        if binomial(h, half) >= target {
            return h;
        }
        h += 1;
    }
}

fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result.min(u64::MAX as u128) as u64
}

/// Derives `(X, S, H, H', L, L')` and looks up the systematic index for `k`,
/// per spec §4.1. Fails with [`ParameterError`] if `k` is out of range or a
/// derived parameter (`S`, `L'`) is not representable via the table lookups.
pub fn derive(k: u32, tables: &dyn RaptorTables) -> Result<Params, ParameterError> {
    if !(MIN_K..=MAX_K).contains(&k) {
        return Err(ParameterError::new(
            k,
            format!("k must be between {MIN_K} and {MAX_K}"),
        ));
    }

    // Smallest positive integer X such that X*(X-1) >= 2K.
    let mut x: u32 = 1;
    while (x as u64) * (x as u64 - 1) < 2 * k as u64 {
        x += 1;
    }

    // Smallest prime S >= ceil(0.01*K) + X.
    let floor_bound = (k as u64 * 1 + 99) / 100; // ceil(0.01*k)
    let s_lower = floor_bound as u32 + x;
    let s = tables
        .next_prime(s_lower)
        .ok_or_else(|| ParameterError::new(k, "no prime s found".to_string()))?;

    // Smallest H such that C(H, ceil(H/2)) >= K + S.
    let h = smallest_h((k + s) as u64);
    let h_prime = (h + 1) / 2;

    let l = k + s + h;
    let l_prime = tables
        .next_prime(l)
        .ok_or_else(|| ParameterError::new(k, "no prime l_prime found".to_string()))?;

    let systematic_index = tables.systematic_index(k);

    Ok(Params { k, x, s, h, h_prime, l, l_prime, systematic_index })
}
