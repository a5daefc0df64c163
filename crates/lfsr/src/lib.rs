//! Closed-form XOR equations for Galois LFSRs.
//!
//! This crate unrolls a linear feedback shift register for a fixed number of
//! clock cycles *symbolically*: instead of bits, every register position holds a
//! GF(2) linear combination of the injected data bits and (optionally) the
//! register's initial contents. The result describes combinational logic
//! equivalent to `data_size` cycles of shifting, which is how parallel CRC
//! circuits are derived from a serial polynomial.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`poly`] | Decode and validate tap masks; well-known CRC polynomials |
//! | [`terms`] | [`TermSet`]: self-cancelling XOR of [`Variable`]s |
//! | [`unroll`] | [`LfsrParams`] → [`StateVector`] |
//! | [`reduce`] | Deferred-cancellation reference path + parity reduction |
//! | [`format`] | Equation listing and SystemVerilog rendering |
//! | [`config`] | Initial-state offset and strategy selection |
//!
//! # Example
//!
//! ```rust
//! let text = lfsr::unroll_to_string(8, 8, 0x07, false)?;
//! assert_eq!(text.lines().next(), Some("c[0] = d[0] ^ d[6] ^ d[7]"));
//!
//! // Invalid parameters are rejected, never rendered.
//! assert!(lfsr::unroll_to_string(8, 4, 0x10, false).is_err());
//! # Ok::<(), lfsr::UnrollError>(())
//! ```
//!
//! # Environment Overrides (`std` only)
//!
//! Read only by [`config::get`]. [`unroll_lfsr`] and [`unroll_to_string`] are
//! pure functions of their arguments and ignore these.
//!
//! | Variable | Values |
//! |----------|--------|
//! | `LFSR_UNROLL_STRATEGY` | `auto`, `canonical` (`toggle`, `set`), `deferred` (`reduce`, `parity`) |
//!
//! # no_std Support
//!
//! The crate needs `alloc` only. Disable the `std` feature for embedded use;
//! [`config::get`] then returns the defaults.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod error;
pub mod format;
pub mod poly;
pub mod reduce;
pub mod terms;
pub mod unroll;

pub use config::{DEFAULT_INITIAL_OFFSET, Strategy, UnrollConfig};
pub use error::{Result, UnrollError};
pub use terms::{TermSet, Variable, VariableKind};
pub use unroll::{LfsrParams, StateVector, unroll, unroll_lfsr, unroll_to_string};
