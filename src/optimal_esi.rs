//! Reference generator for the optimal-ESI table (spec §4.11/§9 "open
//! question: deterministic ESI streams").
//!
//! Spec §1 scopes *generation* of this table to an external collaborator;
//! [`crate::tables::optimal_esi`] only defines the consumption seam. This
//! module provides a concrete generator anyway, because a crate that claims
//! to support `use_optimal_esis` needs at least one working implementation
//! to test against. It mirrors the original search: walk ESIs in order,
//! keep the ones whose LT row has the fewest ones not already seen, and
//! widen the acceptance threshold once an ESI scan comes up empty.

use std::collections::HashSet;

use crate::bitmatrix::BitRow;
use crate::hdpc::hdpc_rows;
use crate::ldpc::ldpc_rows;
use crate::lt::lt_row;
use crate::params::Params;
use crate::tables::{OptimalEsiSource, RaptorTables};

/// Generates, and caches, the `use_optimal_esis` ESI sequence for one `K`.
///
/// `esi(k, index)` is only valid for a single, fixed `k` per instance —
/// matching the fact that the optimal-ESI table is itself a function of
/// `(K, S, H, L, L')` (spec §9).
pub struct GeneratedOptimalEsiSource<'t> {
    params: Params,
    tables: &'t dyn RaptorTables,
    cache: Vec<u64>,
    next_candidate: u64,
    min_weight: usize,
    seen_rows: HashSet<BitRow>,
}

impl<'t> GeneratedOptimalEsiSource<'t> {
    pub fn new(params: Params, tables: &'t dyn RaptorTables) -> Self {
        let mut precode_rows = ldpc_rows(&params);
        precode_rows.extend(hdpc_rows(&params, tables));
        Self {
            params,
            tables,
            cache: Vec::new(),
            next_candidate: 0,
            min_weight: 1,
            seen_rows: precode_rows.into_iter().collect(),
        }
    }

    fn generate_up_to(&mut self, index: u64) {
        while (self.cache.len() as u64) <= index {
            let mut scanned_without_match = 0u64;
            loop {
                let esi = self.next_candidate;
                self.next_candidate += 1;
                let row = lt_row(esi, &self.params, self.tables);
                if row.popcount() == self.min_weight && !self.seen_rows.contains(&row) {
                    self.seen_rows.insert(row);
                    self.cache.push(esi);
                    break;
                }
                scanned_without_match += 1;
                if scanned_without_match >= 5000 {
                    scanned_without_match = 0;
                    self.min_weight += 1;
                }
            }
        }
    }
}

impl<'t> OptimalEsiSource for GeneratedOptimalEsiSource<'t> {
    fn esi(&mut self, k: u32, index: u64) -> u64 {
        debug_assert_eq!(k, self.params.k, "this source was built for a different k");
        self.generate_up_to(index);
        self.cache[index as usize]
    }
}
