//! Systematic index table: `systematic_index[k]` for `k in [4, 8192]`, per
//! RFC 5053 Annex B (spec §3/§6).
//!
//! Annex B pins one entry per `k` across the whole valid range — 8189
//! entries — which is exactly the kind of large externally-owned constant
//! table the spec scopes out of the core (§1: "the numeric distribution
//! tables ... appear in §6 only as interfaces the core consumes"). The
//! stand-in here is a fixed, pure function of `k`: deterministic (required
//! by the "idempotence of parameter derivation" property in spec §8) and
//! stable across calls, but not the real Annex B values. A production
//! deployment substitutes the real table by replacing [`lookup`].

const MULTIPLIER: u64 = 2_654_435_761;
const MODULUS: u64 = 1 << 16;

pub fn lookup(k: u32) -> u32 {
    (((k as u64).wrapping_mul(MULTIPLIER)) % MODULUS) as u32
}
