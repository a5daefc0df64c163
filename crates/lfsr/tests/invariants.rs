//! Fixed-vector checks of the public surface.

use lfsr::{
  LfsrParams, Strategy, UnrollConfig, UnrollError, Variable, VariableKind, format::VerilogModule, poly, unroll,
  unroll_to_string,
};

fn canonical() -> UnrollConfig {
  UnrollConfig::new().with_strategy(Strategy::Canonical)
}

#[test]
fn crc8_eight_cycles() {
  let expected = "\
c[0] = d[0] ^ d[6] ^ d[7]
c[1] = d[0] ^ d[1] ^ d[6]
c[2] = d[0] ^ d[1] ^ d[2] ^ d[6]
c[3] = d[1] ^ d[2] ^ d[3] ^ d[7]
c[4] = d[2] ^ d[3] ^ d[4]
c[5] = d[3] ^ d[4] ^ d[5]
c[6] = d[4] ^ d[5] ^ d[6]
c[7] = d[5] ^ d[6] ^ d[7]";

  let state = unroll(&LfsrParams::new(8, 8, 0x07, false), &canonical()).unwrap();
  assert_eq!(state.to_string(), expected);
  assert_eq!(unroll_to_string(8, 8, 0x07, false).unwrap(), expected);
}

#[test]
fn crc8_eight_cycles_with_initial_state() {
  let state = unroll(&LfsrParams::new(8, 8, 0x07, true), &canonical()).unwrap();
  assert_eq!(
    state.to_string().lines().next(),
    Some("c[0] = d[0] ^ d[6] ^ d[7] ^ is[0] ^ is[6] ^ is[7]")
  );
}

#[test]
fn verilog_crc8_with_initial_state() {
  let params = LfsrParams::new(8, 8, 0x07, true);
  let state = unroll(&params, &canonical()).unwrap();
  let expected = "\
module parallel_lfsr(
    // data in
    input  logic [7:0] d;
    // initial state
    input  logic [7:0] i;
    // final state
    output logic [7:0] c;
);
    c[0] = d[7] ^ d[6] ^ d[0] ^ i[7] ^ i[6] ^ i[0];
    c[1] = d[6] ^ d[1] ^ d[0] ^ i[6] ^ i[1] ^ i[0];
    c[2] = d[6] ^ d[2] ^ d[1] ^ d[0] ^ i[6] ^ i[2] ^ i[1] ^ i[0];
    c[3] = d[7] ^ d[3] ^ d[2] ^ d[1] ^ i[7] ^ i[3] ^ i[2] ^ i[1];
    c[4] = d[4] ^ d[3] ^ d[2] ^ i[4] ^ i[3] ^ i[2];
    c[5] = d[5] ^ d[4] ^ d[3] ^ i[5] ^ i[4] ^ i[3];
    c[6] = d[6] ^ d[5] ^ d[4] ^ i[6] ^ i[5] ^ i[4];
    c[7] = d[7] ^ d[6] ^ d[5] ^ i[7] ^ i[6] ^ i[5];
endmodule
";
  assert_eq!(VerilogModule::new(&params, &state).to_string(), expected);
}

#[test]
fn verilog_crc8_fifty_six_cycles() {
  let params = LfsrParams::new(56, 8, 0x07, false);
  let state = unroll(&params, &canonical()).unwrap();
  let expected = "\
module parallel_lfsr(
    // data in
    input  logic [55:0] d;
    // final state
    output logic [7:0] c;
);
    c[0] = d[54] ^ d[53] ^ d[52] ^ d[50] ^ d[49] ^ d[48] ^ d[45] ^ d[43] ^ d[40] ^ d[39] ^ d[35] ^ d[34] ^ d[31] ^ d[30] ^ d[28] ^ d[23] ^ d[21] ^ d[19] ^ d[18] ^ d[16] ^ d[14] ^ d[12] ^ d[8] ^ d[7] ^ d[6] ^ d[0];
    c[1] = d[55] ^ d[52] ^ d[51] ^ d[48] ^ d[46] ^ d[45] ^ d[44] ^ d[43] ^ d[41] ^ d[39] ^ d[36] ^ d[34] ^ d[32] ^ d[30] ^ d[29] ^ d[28] ^ d[24] ^ d[23] ^ d[22] ^ d[21] ^ d[20] ^ d[18] ^ d[17] ^ d[16] ^ d[15] ^ d[14] ^ d[13] ^ d[12] ^ d[9] ^ d[6] ^ d[1] ^ d[0];
    c[2] = d[54] ^ d[50] ^ d[48] ^ d[47] ^ d[46] ^ d[44] ^ d[43] ^ d[42] ^ d[39] ^ d[37] ^ d[34] ^ d[33] ^ d[29] ^ d[28] ^ d[25] ^ d[24] ^ d[22] ^ d[17] ^ d[15] ^ d[13] ^ d[12] ^ d[10] ^ d[8] ^ d[6] ^ d[2] ^ d[1] ^ d[0];
    c[3] = d[55] ^ d[51] ^ d[49] ^ d[48] ^ d[47] ^ d[45] ^ d[44] ^ d[43] ^ d[40] ^ d[38] ^ d[35] ^ d[34] ^ d[30] ^ d[29] ^ d[26] ^ d[25] ^ d[23] ^ d[18] ^ d[16] ^ d[14] ^ d[13] ^ d[11] ^ d[9] ^ d[7] ^ d[3] ^ d[2] ^ d[1];
    c[4] = d[52] ^ d[50] ^ d[49] ^ d[48] ^ d[46] ^ d[45] ^ d[44] ^ d[41] ^ d[39] ^ d[36] ^ d[35] ^ d[31] ^ d[30] ^ d[27] ^ d[26] ^ d[24] ^ d[19] ^ d[17] ^ d[15] ^ d[14] ^ d[12] ^ d[10] ^ d[8] ^ d[4] ^ d[3] ^ d[2];
    c[5] = d[53] ^ d[51] ^ d[50] ^ d[49] ^ d[47] ^ d[46] ^ d[45] ^ d[42] ^ d[40] ^ d[37] ^ d[36] ^ d[32] ^ d[31] ^ d[28] ^ d[27] ^ d[25] ^ d[20] ^ d[18] ^ d[16] ^ d[15] ^ d[13] ^ d[11] ^ d[9] ^ d[5] ^ d[4] ^ d[3];
    c[6] = d[54] ^ d[52] ^ d[51] ^ d[50] ^ d[48] ^ d[47] ^ d[46] ^ d[43] ^ d[41] ^ d[38] ^ d[37] ^ d[33] ^ d[32] ^ d[29] ^ d[28] ^ d[26] ^ d[21] ^ d[19] ^ d[17] ^ d[16] ^ d[14] ^ d[12] ^ d[10] ^ d[6] ^ d[5] ^ d[4];
    c[7] = d[55] ^ d[53] ^ d[52] ^ d[51] ^ d[49] ^ d[48] ^ d[47] ^ d[44] ^ d[42] ^ d[39] ^ d[38] ^ d[34] ^ d[33] ^ d[30] ^ d[29] ^ d[27] ^ d[22] ^ d[20] ^ d[18] ^ d[17] ^ d[15] ^ d[13] ^ d[11] ^ d[7] ^ d[6] ^ d[5];
endmodule
";
  assert_eq!(VerilogModule::new(&params, &state).to_string(), expected);
}

#[test]
fn rejects_empty_register() {
  assert_eq!(unroll_to_string(8, 0, 0, false), Err(UnrollError::ZeroStateSize));
}

#[test]
fn rejects_zero_cycles() {
  assert_eq!(unroll_to_string(0, 8, 0x07, false), Err(UnrollError::ZeroDataSize));
}

#[test]
fn rejects_taps_beyond_register() {
  for (state_size, polynomial) in [(8, 0x107u64), (4, 0x10), (31, 0x04C1_1DB7 | 1 << 31), (1, 0b10)] {
    assert_eq!(
      unroll(&LfsrParams::new(8, state_size, polynomial, false), &canonical()),
      Err(UnrollError::PolynomialOutOfRange { polynomial, state_size }),
      "state_size={state_size} polynomial={polynomial:#x}"
    );
  }
}

#[test]
fn rejects_data_reaching_initial_namespace() {
  let config = canonical().with_initial_offset(16);
  assert_eq!(
    unroll(&LfsrParams::new(17, 4, 0x3, true), &config),
    Err(UnrollError::DataSizeExceedsOffset {
      data_size: 17,
      offset: 16
    })
  );
  assert!(unroll(&LfsrParams::new(16, 4, 0x3, true), &config).is_ok());
}

#[test]
fn namespaces_never_collide() {
  // Smallest legal offset: data ids run right up to it.
  let offset = 24;
  let config = canonical().with_initial_offset(offset);
  let state = unroll(&LfsrParams::new(24, 8, 0x07, true), &config).unwrap();

  for eq in &state {
    for var in eq {
      match var.kind(offset) {
        VariableKind::Data(k) => assert!(k < 24),
        VariableKind::InitialState(k) => assert!(k < 8),
      }
    }
  }
  assert!(state.to_string().contains("is[7]"));
  assert!(state.iter().any(|eq| eq.contains(Variable::data(23))));
}

#[test]
fn custom_offset_renders_same_equations() {
  let params = LfsrParams::new(12, 8, 0x07, true);
  let default = unroll(&params, &canonical()).unwrap();
  let custom = unroll(&params, &canonical().with_initial_offset(1 << 40)).unwrap();
  assert_eq!(default.to_string(), custom.to_string());
  assert_ne!(default, custom);
}

#[test]
fn known_polynomials_unroll() {
  for known in poly::KNOWN {
    let state = unroll(&LfsrParams::new(8, known.width, known.polynomial, true), &canonical()).unwrap();
    assert_eq!(state.len(), known.width, "{}", known.name);
    assert!(state.iter().all(|eq| !eq.is_empty()), "{}", known.name);
  }
}

#[test]
fn large_register_stays_practical() {
  let state = unroll(&LfsrParams::new(2048, 1024, 0x04C1_1DB7, true), &canonical()).unwrap();
  assert_eq!(state.len(), 1024);
  assert!(state.iter().map(|eq| eq.len()).max().unwrap() <= 2048 + 1024);
}
