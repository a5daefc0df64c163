//! Deferred-cancellation unrolling and parity reduction.
//!
//! This is the reference path for [`Strategy::Deferred`](crate::Strategy::Deferred):
//! the unroll loop appends variable occurrences without ever cancelling them,
//! and [`reduce`] keeps exactly the variables that occur an odd number of times
//! per position. The result must equal the toggle-cancelling unroll for every
//! parameter set; the property tests hold the two paths against each other.
//!
//! Occurrence lists grow exponentially with cycle count for dense tap masks, so
//! this path is only practical for small registers and short inputs.

use alloc::vec::Vec;

use crate::{
  poly,
  terms::{TermSet, Variable},
  unroll::LfsrParams,
};

/// Per-position occurrence lists, duplicates allowed.
pub type OccurrenceLists = Vec<Vec<Variable>>;

/// Unrolls without cancellation. `params` must already be validated.
#[must_use]
pub fn unroll_deferred(params: &LfsrParams, initial_offset: u64) -> OccurrenceLists {
  let taps = poly::decode_taps(params.state_size, params.polynomial);
  let mut state: OccurrenceLists = (0..params.state_size as u64)
    .map(|position| {
      if params.has_variable_initial_state {
        alloc::vec![Variable::initial_state(position, initial_offset)]
      } else {
        Vec::new()
      }
    })
    .collect();

  for data_bit_idx in (0..params.data_size as u64).rev() {
    state.rotate_right(1);
    let Some((feedback, rest)) = state.split_first_mut() else {
      break;
    };
    feedback.push(Variable::data(data_bit_idx));
    for (slot, _) in rest.iter_mut().zip(taps.iter().skip(1)).filter(|(_, tap)| **tap) {
      slot.extend_from_slice(feedback);
    }
  }

  state
}

/// Parity-reduces each position: a variable survives iff it occurs an odd
/// number of times.
#[must_use]
pub fn reduce(lists: &[Vec<Variable>]) -> Vec<TermSet> {
  lists.iter().map(|list| reduce_one(list)).collect()
}

fn reduce_one(list: &[Variable]) -> TermSet {
  let mut sorted = list.to_vec();
  sorted.sort_unstable();

  let mut out = TermSet::empty();
  for run in sorted.chunk_by(|a, b| a == b).filter(|run| run.len() % 2 == 1) {
    if let Some(&var) = run.first() {
      out.toggle(var);
    }
  }
  out
}
