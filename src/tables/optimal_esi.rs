//! Optimal-ESI table: a precomputed sequence of ESIs biased toward
//! low-degree triples, consumed when `use_optimal_esis` is set (spec §4.11/§6).
//!
//! Spec §1 scopes *generation* of this table out of the core ("optimal-ESI
//! lookup table generation" is named as an external collaborator); the core
//! only needs to *consume* one. [`OptimalEsiSource`] is that consumption
//! seam. A reference generator (mirroring the original `gen_optimal_symbols`
//! search) lives in [`crate::optimal_esi`] since it needs the LDPC/HDPC/LT
//! row builders, which this low-level `tables` module does not depend on.

/// Supplies the ESI to use for the `index`-th produced symbol of a block of
/// size `k`, when `use_optimal_esis` is enabled.
pub trait OptimalEsiSource {
    fn esi(&mut self, k: u32, index: u64) -> u64;
}

/// Trivial source equating the `index`-th optimal ESI with `index` itself —
/// i.e. falls back to sequential ESI generation. Useful as a placeholder
/// when no richer table is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialEsiSource;

impl OptimalEsiSource for SequentialEsiSource {
    fn esi(&mut self, _k: u32, index: u64) -> u64 {
        index
    }
}
