//! Basic unrolling: equation listing, Verilog module, and rejected inputs.
//!
//! Run with: `RUST_LOG=debug cargo run --example basic -p lfsr`

use lfsr::{LfsrParams, format::VerilogModule, poly, unroll, unroll_to_string};

fn main() {
  env_logger::init();

  println!("=== CRC-8 (0x07), 8 cycles ===\n");
  match unroll_to_string(8, 8, 0x07, false) {
    Ok(text) => println!("{text}\n"),
    Err(err) => eprintln!("error: {err}"),
  }

  println!("=== CRC-16/CCITT, 8 cycles, Verilog ===\n");
  if let Some(known) = poly::lookup("CRC-16/CCITT") {
    let params = LfsrParams::new(8, known.width, known.polynomial, true);
    match unroll(&params, &lfsr::config::get()) {
      Ok(state) => print!("{}", VerilogModule::new(&params, &state)),
      Err(err) => eprintln!("error: {err}"),
    }
  }

  println!("\n=== Rejected inputs ===\n");
  for (data_size, state_size, polynomial) in [(8, 0, 0x07), (0, 8, 0x07), (8, 8, 0x107)] {
    if let Err(err) = unroll_to_string(data_size, state_size, polynomial, false) {
      println!("unroll({data_size}, {state_size}, {polynomial:#x}): {err}");
    }
  }
}
