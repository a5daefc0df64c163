//! Unroll configuration (namespace offset + strategy selection).
//!
//! [`UnrollConfig`] is a plain value passed to [`crate::unroll()`]; building one
//! never reads the environment, and neither do the scalar entry points.
//!
//! [`get`] is an opt-in process configuration for tools and benches. It layers a
//! strategy override on top of the defaults when the `std` feature is enabled.
//! Strategies only change how the equations are computed, never their value, so
//! the offset is not overridable.

/// Offset added to a register position to form its initial-state variable id.
///
/// Must exceed the largest data size that will be unrolled.
pub const DEFAULT_INITIAL_OFFSET: u64 = 1 << 31;

/// Unrolling path selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
  /// Use the default selector.
  #[default]
  Auto,
  /// Cancel duplicates on every toggle and merge.
  Canonical,
  /// Collect duplicate-tolerant occurrence lists, then parity-reduce once.
  ///
  /// Occurrence lists grow exponentially with cycle count for dense taps; only
  /// useful for cross-checking small configurations.
  Deferred,
}

impl Strategy {
  /// Lowercase name, as accepted by [`Strategy::parse`].
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Canonical => "canonical",
      Self::Deferred => "deferred",
    }
  }

  /// Resolves [`Strategy::Auto`] to a concrete path.
  #[inline]
  #[must_use]
  pub const fn resolve(self) -> Self {
    match self {
      Self::Auto => Self::Canonical,
      other => other,
    }
  }

  /// Parses a strategy name, accepting the aliases listed in the crate docs.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("canonical") || value.eq_ignore_ascii_case("toggle") || value.eq_ignore_ascii_case("set")
    {
      return Some(Self::Canonical);
    }
    if value.eq_ignore_ascii_case("deferred")
      || value.eq_ignore_ascii_case("reduce")
      || value.eq_ignore_ascii_case("parity")
    {
      return Some(Self::Deferred);
    }
    None
  }
}

/// Full unroll configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnrollConfig {
  /// Offset separating initial-state ids from data ids.
  pub initial_offset: u64,
  /// Requested unrolling path.
  pub strategy: Strategy,
}

impl UnrollConfig {
  /// Defaults, without consulting the environment.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      initial_offset: DEFAULT_INITIAL_OFFSET,
      strategy: Strategy::Auto,
    }
  }

  /// Replaces the initial-state offset.
  #[must_use]
  pub const fn with_initial_offset(mut self, initial_offset: u64) -> Self {
    self.initial_offset = initial_offset;
    self
  }

  /// Replaces the requested strategy.
  #[must_use]
  pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
    self.strategy = strategy;
    self
  }
}

impl Default for UnrollConfig {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  strategy: Option<Strategy>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    let value = std::env::var(name).ok()?;
    if value.trim().is_empty() { None } else { Some(value) }
  }

  let strategy = var("LFSR_UNROLL_STRATEGY").and_then(|v| Strategy::parse(&v));
  if let Some(strategy) = strategy {
    log::debug!("LFSR_UNROLL_STRATEGY override: {}", strategy.as_str());
  }

  Overrides { strategy }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn apply(base: UnrollConfig, ov: Overrides) -> UnrollConfig {
  UnrollConfig {
    strategy: ov.strategy.unwrap_or(base.strategy),
    ..base
  }
}

/// Get the effective configuration for this process.
///
/// Environment overrides are read once and cached. Only callers that pass this
/// value to [`crate::unroll()`] see them; [`crate::unroll_lfsr`] and
/// [`crate::unroll_to_string`] always use [`UnrollConfig::new`].
#[must_use]
pub fn get() -> UnrollConfig {
  apply(UnrollConfig::new(), overrides())
}
