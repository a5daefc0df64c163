//! Rendering unrolled equations as text.
//!
//! Two renderings are provided:
//!
//! | Renderer | Variable names | Term order | Use |
//! |----------|----------------|------------|-----|
//! | [`Equations`], [`render_equations`] | `d[k]`, `is[k]` | ascending id | inspection, tests, bindings |
//! | [`VerilogModule`] | `d[k]`, `i[k]` | data then initial state, each descending | synthesis |

use alloc::{
  string::{String, ToString},
  vec::Vec,
};
use core::fmt::{self, Write};

use crate::{
  terms::{TermSet, Variable, VariableKind},
  unroll::{LfsrParams, StateVector},
};

/// Renders one `c[i] = ...` line per position, joined by newlines with no
/// trailing newline.
///
/// ```
/// let state = lfsr::unroll_lfsr(1, 2, 0b10, false)?;
/// assert_eq!(lfsr::format::render_equations(state.as_slice(), state.initial_offset()), "c[0] = d[0]\nc[1] = d[0]");
/// # Ok::<(), lfsr::UnrollError>(())
/// ```
#[must_use]
pub fn render_equations(state: &[TermSet], initial_offset: u64) -> String {
  Equations::new(state, initial_offset).to_string()
}

/// Borrowed equations that display as the `c[i] = ...` listing.
#[derive(Clone, Copy, Debug)]
pub struct Equations<'a> {
  state: &'a [TermSet],
  initial_offset: u64,
}

impl<'a> Equations<'a> {
  /// Pairs position-indexed equations with the offset that classifies their variables.
  #[must_use]
  pub fn new(state: &'a [TermSet], initial_offset: u64) -> Self {
    Self { state, initial_offset }
  }
}

impl fmt::Display for Equations<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_equations(f, self.state, self.initial_offset)
  }
}

pub(crate) fn write_equations<W: Write>(out: &mut W, state: &[TermSet], initial_offset: u64) -> fmt::Result {
  for (i, terms) in state.iter().enumerate() {
    if i > 0 {
      out.write_char('\n')?;
    }
    write!(out, "c[{i}] = ")?;
    for (n, var) in terms.iter().enumerate() {
      if n > 0 {
        out.write_str(" ^ ")?;
      }
      match var.kind(initial_offset) {
        VariableKind::Data(k) => write!(out, "d[{k}]")?,
        VariableKind::InitialState(k) => write!(out, "is[{k}]")?,
      }
    }
  }
  Ok(())
}

/// A SystemVerilog module computing the unrolled register in one step.
///
/// ```
/// use lfsr::{LfsrParams, UnrollConfig, format::VerilogModule, unroll};
///
/// let params = LfsrParams::new(2, 2, 0b10, false);
/// let state = unroll(&params, &UnrollConfig::new())?;
/// let text = VerilogModule::new(&params, &state).to_string();
/// assert!(text.contains("    c[1] = d[0];\n"));
/// # Ok::<(), lfsr::UnrollError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct VerilogModule<'a> {
  params: &'a LfsrParams,
  state: &'a StateVector,
}

impl<'a> VerilogModule<'a> {
  /// Renders `state`, which must have been unrolled from `params`.
  #[must_use]
  pub fn new(params: &'a LfsrParams, state: &'a StateVector) -> Self {
    Self { params, state }
  }
}

impl fmt::Display for VerilogModule<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let data_msb = self.params.data_size.saturating_sub(1);
    let state_msb = self.params.state_size.saturating_sub(1);

    writeln!(f, "module parallel_lfsr(")?;
    writeln!(f, "    // data in")?;
    writeln!(f, "    input  logic [{data_msb}:0] d;")?;
    if self.params.has_variable_initial_state {
      writeln!(f, "    // initial state")?;
      writeln!(f, "    input  logic [{state_msb}:0] i;")?;
    }
    writeln!(f, "    // final state")?;
    writeln!(f, "    output logic [{state_msb}:0] c;")?;
    writeln!(f, ");")?;

    let offset = self.state.initial_offset();
    for (i, terms) in self.state.iter().enumerate() {
      write!(f, "    c[{i}] = ")?;
      if terms.is_empty() {
        f.write_str("1'b0")?;
      }
      let vars: Vec<Variable> = terms.iter().collect();
      let split = vars.partition_point(|var| var.id() < offset);
      let (data, initial) = vars.split_at(split);
      for (n, var) in data.iter().rev().chain(initial.iter().rev()).enumerate() {
        if n > 0 {
          f.write_str(" ^ ")?;
        }
        match var.kind(offset) {
          VariableKind::Data(k) => write!(f, "d[{k}]")?,
          VariableKind::InitialState(k) => write!(f, "i[{k}]")?,
        }
      }
      writeln!(f, ";")?;
    }
    writeln!(f, "endmodule")
  }
}
