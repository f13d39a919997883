//! Systematic Raptor R10 fountain code core (RFC 5053): precode
//! construction and decoding-schedule solver.
//!
//! Given `K` source symbols, [`Raptor`] derives the R10 parameters,
//! assembles the binary constraint matrix, reduces it to the identity while
//! recording a replayable schedule, and uses the resulting intermediate
//! symbols to produce any encoding symbol on demand. See `SPEC_FULL.md` for
//! the full module-by-module design.

pub mod bitmatrix;
pub mod config;
pub mod error;
pub mod hdpc;
pub mod ldpc;
pub mod lt;
pub mod matrix;
pub mod optimal_esi;
pub mod params;
pub mod prepass;
pub mod raptor;
pub mod replay;
pub mod schedule;
pub mod solver;
pub mod tables;
pub mod triple;

pub use config::{RaptorConfig, WordWidth};
pub use error::{DecodingScheduleError, ParameterError, RaptorError};
pub use params::Params;
pub use raptor::Raptor;
