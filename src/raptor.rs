//! Top-level API (spec §6): `Raptor::new` / `add_symbol` / `can_decode` /
//! `calculate_intermediate_symbols` / `next_encoding_symbol`.

use log::{debug, trace};

use crate::config::RaptorConfig;
use crate::error::{DecodingScheduleError, RaptorError};
use crate::lt::encode_payload;
use crate::matrix::assemble;
use crate::optimal_esi::GeneratedOptimalEsiSource;
use crate::params::{self, Params};
use crate::replay::replay;
use crate::solver::solve;
use crate::tables::{DefaultTables, OptimalEsiSource, RaptorTables};

/// A systematic R10 encoder/decoder instance for one block of `K` source
/// symbols (spec §5: single-threaded, owns all of its state, shares
/// nothing with other instances).
pub struct Raptor<T: RaptorTables = DefaultTables> {
    params: Params,
    config: RaptorConfig,
    tables: T,
    symbols: Vec<(u64, Vec<u8>)>,
    current_id: u64,
    intermediate: Option<Vec<Vec<u8>>>,
    payload_len: Option<usize>,
}

impl Raptor<DefaultTables> {
    pub fn new(k: u32, config: RaptorConfig) -> Result<Self, RaptorError> {
        Self::with_tables(k, config, DefaultTables)
    }
}

impl<T: RaptorTables> Raptor<T> {
    pub fn with_tables(k: u32, config: RaptorConfig, tables: T) -> Result<Self, RaptorError> {
        let params = params::derive(k, &tables)?;
        debug!("raptor instance for k={k}: s={} h={} l={} l'={}", params.s, params.h, params.l, params.l_prime);
        Ok(Self {
            params,
            config,
            tables,
            symbols: Vec::new(),
            current_id: 0,
            intermediate: None,
            payload_len: None,
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Adds a received encoding symbol, in whatever order the caller
    /// received it (spec §4.6: LT rows are assembled in insertion order).
    pub fn add_symbol(&mut self, esi: u64, payload: Vec<u8>) {
        if self.payload_len.is_none() {
            self.payload_len = Some(payload.len());
        }
        trace!("received symbol esi={esi} ({} bytes)", payload.len());
        self.symbols.push((esi, payload));
        self.intermediate = None;
    }

    /// Attempts the full schedule construction on a disposable copy of `A`
    /// and reports whether it would succeed, without surfacing the error
    /// (spec §7).
    pub fn can_decode(&self) -> bool {
        let esis: Vec<u64> = self.symbols.iter().map(|(esi, _)| *esi).collect();
        let mut matrix = assemble(&self.params, &self.tables, &esis);
        solve(&mut matrix, &self.params, self.config.use_prepass).is_ok()
    }

    /// Builds matrix `A`, solves the decoding schedule, and replays it over
    /// the received payloads to produce the `L` intermediate symbols.
    pub fn calculate_intermediate_symbols(&mut self) -> Result<(), RaptorError> {
        if (self.symbols.len() as u32) < self.params.k {
            return Err(DecodingScheduleError::new(format!(
                "need at least {} symbols to decode but only have {}",
                self.params.k,
                self.symbols.len()
            ))
            .into());
        }

        let w = self.payload_len.unwrap_or(0);
        let esis: Vec<u64> = self.symbols.iter().map(|(esi, _)| *esi).collect();
        let payloads: Vec<Vec<u8>> = self.symbols.iter().map(|(_, p)| p.clone()).collect();

        let mut matrix = assemble(&self.params, &self.tables, &esis);
        let schedule = solve(&mut matrix, &self.params, self.config.use_prepass)?;
        let intermediate = replay(&schedule, &self.params, &payloads, w);

        debug!("calculated {} intermediate symbols for k={}", intermediate.len(), self.params.k);
        self.intermediate = Some(intermediate);
        Ok(())
    }

    /// Produces the next encoding symbol `(esi, payload)`, drawing ESIs
    /// sequentially or from the optimal-ESI source per `use_optimal_esis`
    /// (spec §4.11). Requires [`Self::calculate_intermediate_symbols`] to
    /// have been called first.
    pub fn next_encoding_symbol(&mut self) -> Result<(u64, Vec<u8>), RaptorError> {
        let intermediate = self.intermediate.as_ref().ok_or_else(|| {
            DecodingScheduleError::new("intermediate symbols have not been calculated yet")
        })?;

        let esi = if self.config.use_optimal_esis {
            let mut source = GeneratedOptimalEsiSource::new(self.params, &self.tables);
            source.esi(self.params.k, self.current_id)
        } else {
            self.current_id
        };
        self.current_id += 1;

        let payload = encode_payload(esi, &self.params, &self.tables, intermediate);
        Ok((esi, payload))
    }
}
