//! Differential fuzzing of the two unrolling paths.
//!
//! Canonical and deferred unrolling must agree on every accepted parameter set,
//! and every rejected set must be rejected by both.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lfsr::{LfsrParams, Strategy, UnrollConfig, unroll};

#[derive(Debug, Arbitrary)]
struct Input {
  data_size: u8,
  state_size: u8,
  polynomial: u64,
  initial: bool,
  offset: u16,
}

fuzz_target!(|input: Input| {
  // Deferred occurrence lists grow exponentially; keep the search space small.
  let params = LfsrParams::new(
    usize::from(input.data_size % 20),
    usize::from(input.state_size % 10),
    input.polynomial,
    input.initial,
  );
  let base = UnrollConfig::new().with_initial_offset(u64::from(input.offset));

  let canonical = unroll(&params, &base.with_strategy(Strategy::Canonical));
  let deferred = unroll(&params, &base.with_strategy(Strategy::Deferred));

  assert_eq!(
    canonical, deferred,
    "canonical/deferred mismatch for {params:?} offset={}",
    input.offset
  );

  if let Ok(state) = canonical {
    assert_eq!(state.len(), params.state_size);
    let text = state.to_string();
    assert_eq!(text.lines().count(), params.state_size);
  }
});
