//! Tap polynomials.
//!
//! A tap mask carries the coefficients of the characteristic polynomial without
//! the implicit leading term, in normal (non-reflected) bit order: bit `i` set means
//! register position `i` receives the feedback term.

use alloc::vec::Vec;

use crate::error::{Result, UnrollError};

/// Decodes `polynomial` into one tap flag per register position.
///
/// Bits at or above `state_size` are not represented; use [`validate`] to reject
/// them first.
///
/// ```
/// assert_eq!(lfsr::poly::decode_taps(4, 0b0101), [true, false, true, false]);
/// ```
#[must_use]
pub fn decode_taps(state_size: usize, polynomial: u64) -> Vec<bool> {
  (0..state_size)
    .map(|i| u32::try_from(i).ok().and_then(|i| polynomial.checked_shr(i)).is_some_and(|bits| bits & 1 != 0))
    .collect()
}

/// Rejects tap masks with bits at or above `state_size`.
pub fn validate(state_size: usize, polynomial: u64) -> Result<()> {
  let in_range = match u32::try_from(state_size) {
    Ok(width) => polynomial.checked_shr(width).is_none_or(|high| high == 0),
    Err(_) => true,
  };
  if in_range {
    Ok(())
  } else {
    Err(UnrollError::PolynomialOutOfRange { polynomial, state_size })
  }
}

/// A named CRC generator polynomial in normal form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownPolynomial {
  /// Catalogue name, e.g. `"CRC-32"`.
  pub name: &'static str,
  /// Register width in bits.
  pub width: usize,
  /// Tap mask without the leading `x^width` term.
  pub polynomial: u64,
}

/// Commonly analysed generator polynomials.
pub const KNOWN: &[KnownPolynomial] = &[
  KnownPolynomial {
    name: "CRC-8",
    width: 8,
    polynomial: 0x07,
  },
  KnownPolynomial {
    name: "CRC-16/CCITT",
    width: 16,
    polynomial: 0x1021,
  },
  KnownPolynomial {
    name: "CRC-16/IBM",
    width: 16,
    polynomial: 0x8005,
  },
  KnownPolynomial {
    name: "CRC-24/OpenPGP",
    width: 24,
    polynomial: 0x0086_4CFB,
  },
  KnownPolynomial {
    name: "CRC-32",
    width: 32,
    polynomial: 0x04C1_1DB7,
  },
  KnownPolynomial {
    name: "CRC-32C",
    width: 32,
    polynomial: 0x1EDC_6F41,
  },
  KnownPolynomial {
    name: "CRC-64/XZ",
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
  },
  KnownPolynomial {
    name: "CRC-64/NVMe",
    width: 64,
    polynomial: 0xAD93_D235_94C9_3659,
  },
];

/// Finds a catalogue entry by name, ignoring ASCII case.
///
/// ```
/// let crc32 = lfsr::poly::lookup("crc-32").unwrap();
/// assert_eq!(crc32.polynomial, 0x04C1_1DB7);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<KnownPolynomial> {
  KNOWN.iter().copied().find(|known| known.name.eq_ignore_ascii_case(name))
}
