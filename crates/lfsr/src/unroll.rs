//! Symbolic unrolling of a Galois LFSR.
//!
//! Each register position holds an *equation* ([`TermSet`]) instead of a bit.
//! One clock cycle moves every equation up one position, XORs the outgoing
//! equation (plus the injected data bit) into each tapped position, and feeds it
//! back into position 0. After `data_size` cycles each position holds the closed
//! form of that output bit.
//!
//! Data bits are injected from `data_size - 1` down to `0`. The order fixes which
//! data index lines up with which initial-state index in the final equations.

use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Index, slice};

use crate::{
  config::{Strategy, UnrollConfig},
  error::{Result, UnrollError},
  format, poly, reduce,
  terms::{TermSet, Variable},
};

/// The four scalar inputs of an unroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LfsrParams {
  /// Number of clock cycles, one injected data bit each.
  pub data_size: usize,
  /// Register width.
  pub state_size: usize,
  /// Tap mask; bits only below `state_size`.
  pub polynomial: u64,
  /// Seed each position with its own initial-state variable instead of zero.
  pub has_variable_initial_state: bool,
}

impl LfsrParams {
  /// Bundles the four scalar inputs; nothing is checked until [`LfsrParams::validate`].
  #[must_use]
  pub const fn new(data_size: usize, state_size: usize, polynomial: u64, has_variable_initial_state: bool) -> Self {
    Self {
      data_size,
      state_size,
      polynomial,
      has_variable_initial_state,
    }
  }

  /// Checks these parameters against an initial-state offset.
  ///
  /// # Errors
  ///
  /// Reports the first failing check, in this order: state size, data size,
  /// offset (zero, overflow, data-size bound), polynomial range.
  pub fn validate(&self, initial_offset: u64) -> Result<()> {
    if self.state_size == 0 {
      return Err(UnrollError::ZeroStateSize);
    }
    if self.data_size == 0 {
      return Err(UnrollError::ZeroDataSize);
    }
    if initial_offset == 0 {
      return Err(UnrollError::ZeroOffset);
    }
    let top = u64::try_from(self.state_size - 1)
      .ok()
      .and_then(|last| initial_offset.checked_add(last));
    if top.is_none() {
      return Err(UnrollError::OffsetOverflow {
        offset: initial_offset,
        state_size: self.state_size,
      });
    }
    if !u64::try_from(self.data_size).is_ok_and(|size| size <= initial_offset) {
      return Err(UnrollError::DataSizeExceedsOffset {
        data_size: self.data_size,
        offset: initial_offset,
      });
    }
    poly::validate(self.state_size, self.polynomial)
  }

  /// The position-indexed starting equations.
  pub(crate) fn seed(&self, initial_offset: u64) -> Vec<TermSet> {
    (0..self.state_size as u64)
      .map(|position| {
        if self.has_variable_initial_state {
          TermSet::singleton(Variable::initial_state(position, initial_offset))
        } else {
          TermSet::empty()
        }
      })
      .collect()
  }
}

/// Final equations, one per register position (index 0 = least significant tap).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateVector {
  terms: Vec<TermSet>,
  initial_offset: u64,
}

impl StateVector {
  /// Wraps position-indexed equations built against `initial_offset`.
  #[must_use]
  pub fn new(terms: Vec<TermSet>, initial_offset: u64) -> Self {
    Self { terms, initial_offset }
  }

  /// Offset used to classify initial-state variables.
  #[inline]
  #[must_use]
  pub fn initial_offset(&self) -> u64 {
    self.initial_offset
  }

  /// Register width.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.terms.len()
  }

  /// True only for a zero-width vector, which [`unroll()`] never returns.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  /// Equation at `position`, if in range.
  #[inline]
  #[must_use]
  pub fn get(&self, position: usize) -> Option<&TermSet> {
    self.terms.get(position)
  }

  /// Equations from position 0 upwards.
  pub fn iter(&self) -> slice::Iter<'_, TermSet> {
    self.terms.iter()
  }

  /// Equations as a slice.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[TermSet] {
    &self.terms
  }

  /// Unwraps the equations, dropping the offset.
  #[must_use]
  pub fn into_inner(self) -> Vec<TermSet> {
    self.terms
  }
}

impl Index<usize> for StateVector {
  type Output = TermSet;

  /// Panics when `position` is out of range, like slice indexing.
  #[allow(clippy::indexing_slicing)]
  fn index(&self, position: usize) -> &TermSet {
    &self.terms[position]
  }
}

impl<'a> IntoIterator for &'a StateVector {
  type Item = &'a TermSet;
  type IntoIter = slice::Iter<'a, TermSet>;

  fn into_iter(self) -> Self::IntoIter {
    self.terms.iter()
  }
}

/// Renders the `c[i] = ...` equation listing.
impl fmt::Display for StateVector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    format::write_equations(f, &self.terms, self.initial_offset)
  }
}

/// Unrolls `params` using an explicit configuration.
///
/// # Errors
///
/// Returns [`UnrollError`] when `params` fail [`LfsrParams::validate`].
pub fn unroll(params: &LfsrParams, config: &UnrollConfig) -> Result<StateVector> {
  let offset = config.initial_offset;
  if let Err(err) = params.validate(offset) {
    log::debug!("rejected unroll parameters {params:?}: {err}");
    return Err(err);
  }

  let strategy = config.strategy.resolve();
  log::debug!(
    "unrolling data_size={} state_size={} polynomial={:#x} initial_state={} strategy={}",
    params.data_size,
    params.state_size,
    params.polynomial,
    params.has_variable_initial_state,
    strategy.as_str()
  );

  let terms = match strategy {
    Strategy::Deferred => reduce::reduce(&reduce::unroll_deferred(params, offset)),
    Strategy::Auto | Strategy::Canonical => unroll_canonical(params, offset),
  };

  log::debug!(
    "unrolled {} equations, largest has {} terms",
    terms.len(),
    terms.iter().map(TermSet::len).max().unwrap_or(0)
  );
  Ok(StateVector::new(terms, offset))
}

/// Toggle-cancelling unroll loop. `params` must already be validated.
fn unroll_canonical(params: &LfsrParams, offset: u64) -> Vec<TermSet> {
  let taps = poly::decode_taps(params.state_size, params.polynomial);
  let mut state = params.seed(offset);

  for data_bit_idx in (0..params.data_size as u64).rev() {
    // Position 0 now holds the outgoing top equation; every other position has
    // moved up by one.
    state.rotate_right(1);
    let Some((feedback, rest)) = state.split_first_mut() else {
      break;
    };
    feedback.toggle(Variable::data(data_bit_idx));
    for (slot, _) in rest.iter_mut().zip(taps.iter().skip(1)).filter(|(_, tap)| **tap) {
      slot.merge(feedback);
    }
    log::trace!("cycle d[{data_bit_idx}]: feedback has {} terms", feedback.len());
  }

  state
}

/// Unrolls with [`UnrollConfig::new`].
///
/// The result depends only on the four arguments; the environment is never
/// consulted. Use [`unroll()`] with [`crate::config::get`] to opt into overrides.
///
/// ```
/// let state = lfsr::unroll_lfsr(8, 8, 0x07, false)?;
/// assert_eq!(state[0].len(), 3);
/// # Ok::<(), lfsr::UnrollError>(())
/// ```
///
/// # Errors
///
/// Returns [`UnrollError`] for invalid parameters.
pub fn unroll_lfsr(
  data_size: usize,
  state_size: usize,
  polynomial: u64,
  has_variable_initial_state: bool,
) -> Result<StateVector> {
  let params = LfsrParams::new(data_size, state_size, polynomial, has_variable_initial_state);
  unroll(&params, &UnrollConfig::new())
}

/// Unrolls with [`UnrollConfig::new`] and renders the equation listing.
///
/// This is the scalar-in, string-out surface for foreign bindings.
///
/// # Errors
///
/// Returns [`UnrollError`] for invalid parameters.
pub fn unroll_to_string(
  data_size: usize,
  state_size: usize,
  polynomial: u64,
  has_variable_initial_state: bool,
) -> Result<String> {
  use alloc::string::ToString;

  unroll_lfsr(data_size, state_size, polynomial, has_variable_initial_state).map(|state| state.to_string())
}
