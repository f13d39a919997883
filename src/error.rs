//! Error taxonomy (spec §7): two kinds, `ParameterError` and
//! `DecodingScheduleError`, unified under [`RaptorError`] the way the
//! teacher crate unifies `quiche::Error`/FEC failures under
//! `ConnectionError`.

use thiserror::Error;

/// `K` out of range, or a derived parameter (`S`, `H`, `L'`) not
/// representable from the supplied tables (spec §4.1/§7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("parameter error for k={k}: {reason}")]
pub struct ParameterError {
    pub k: u32,
    pub reason: String,
}

impl ParameterError {
    pub fn new(k: u32, reason: impl Into<String>) -> Self {
        Self { k, reason: reason.into() }
    }
}

/// The received symbol set is insufficient or degenerate (spec §4.9/§7):
/// Phase I found no nonzero row in `V` before `i+u == L`, or Phase II found
/// `U_lower` of insufficient rank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("decoding schedule error: {reason}")]
pub struct DecodingScheduleError {
    pub reason: String,
}

impl DecodingScheduleError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RaptorError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    DecodingSchedule(#[from] DecodingScheduleError),
}
