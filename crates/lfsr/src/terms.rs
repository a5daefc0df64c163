//! Symbolic GF(2) terms.
//!
//! A [`TermSet`] is a linear combination over GF(2) of [`Variable`]s in reduced
//! form: every variable appears at most once. Adding a variable that is already
//! present cancels it, so `x ^ x = 0` holds structurally rather than by a later
//! clean-up pass.
//!
//! # Representation
//!
//! Variable ids are sparse (data bits sit near zero, initial-state bits sit above a
//! large offset), so the set is a word-indexed bitset: a `BTreeMap` from
//! `id / 64` to a 64-bit word. Zero words are removed eagerly, which makes derived
//! equality and hashing agree with set equality.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | [`TermSet::toggle`] | one word lookup + XOR |
//! | [`TermSet::merge`] | one XOR per non-zero word of the operand |
//! | [`TermSet::iter`] | ascending, no sorting |

use alloc::collections::{BTreeMap, btree_map};
use core::{
  fmt,
  ops::{BitXor, BitXorAssign},
};

const WORD_BITS: u64 = u64::BITS as u64;

/// A symbolic reference to one input bit or one initial register bit.
///
/// Data bits use ids `0..data_size`; initial-state bits use
/// `offset + position`. The offset lives in [`UnrollConfig`](crate::UnrollConfig),
/// not in the variable, so use [`Variable::kind`] to classify an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(u64);

/// The namespace a [`Variable`] belongs to, with its index inside that namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariableKind {
  /// Data input bit `k`.
  Data(u64),
  /// Initial register bit `k`.
  InitialState(u64),
}

impl Variable {
  /// Wraps a raw id.
  #[inline]
  #[must_use]
  pub const fn new(id: u64) -> Self {
    Self(id)
  }

  /// The variable for data input bit `index`.
  #[inline]
  #[must_use]
  pub const fn data(index: u64) -> Self {
    Self(index)
  }

  /// The variable for initial register bit `position`.
  ///
  /// Callers validate that `offset + position` fits; see
  /// [`LfsrParams::validate`](crate::LfsrParams::validate).
  #[inline]
  #[must_use]
  pub const fn initial_state(position: u64, offset: u64) -> Self {
    Self(offset.wrapping_add(position))
  }

  /// Raw id.
  #[inline]
  #[must_use]
  pub const fn id(self) -> u64 {
    self.0
  }

  /// Classifies the id against an initial-state offset.
  #[inline]
  #[must_use]
  pub const fn kind(self, offset: u64) -> VariableKind {
    if self.0 < offset {
      VariableKind::Data(self.0)
    } else {
      VariableKind::InitialState(self.0 - offset)
    }
  }
}

impl From<u64> for Variable {
  #[inline]
  fn from(id: u64) -> Self {
    Self(id)
  }
}

/// A reduced XOR of variables.
///
/// # Examples
///
/// ```
/// use lfsr::{TermSet, Variable};
///
/// let mut a = TermSet::singleton(Variable::data(3));
/// a.toggle(Variable::data(5));
///
/// let mut b = a.clone();
/// b.merge(&a);
/// assert!(b.is_empty());
///
/// let ids: Vec<u64> = a.iter().map(Variable::id).collect();
/// assert_eq!(ids, [3, 5]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TermSet {
  words: BTreeMap<u64, u64>,
}

impl TermSet {
  /// The zero element.
  #[inline]
  #[must_use]
  pub const fn empty() -> Self {
    Self { words: BTreeMap::new() }
  }

  /// A set holding exactly `var`.
  #[must_use]
  pub fn singleton(var: Variable) -> Self {
    let mut set = Self::empty();
    set.toggle(var);
    set
  }

  /// XOR with a single variable: removes `var` if present, inserts it otherwise.
  pub fn toggle(&mut self, var: Variable) {
    let (word, bit) = split(var);
    self.xor_word(word, bit);
  }

  /// XOR with another set (symmetric difference).
  pub fn merge(&mut self, other: &TermSet) {
    for (&word, &bits) in &other.words {
      self.xor_word(word, bits);
    }
  }

  /// Whether `var` is present.
  #[must_use]
  pub fn contains(&self, var: Variable) -> bool {
    let (word, bit) = split(var);
    self.words.get(&word).is_some_and(|bits| bits & bit != 0)
  }

  /// Number of variables in the set.
  #[must_use]
  pub fn len(&self) -> usize {
    self.words.values().map(|bits| bits.count_ones() as usize).sum()
  }

  /// Whether this is the zero element.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Iterates variables in ascending id order.
  #[must_use]
  pub fn iter(&self) -> Iter<'_> {
    Iter {
      words: self.words.iter(),
      base: 0,
      bits: 0,
    }
  }

  fn xor_word(&mut self, word: u64, bits: u64) {
    match self.words.entry(word) {
      btree_map::Entry::Vacant(slot) => {
        if bits != 0 {
          slot.insert(bits);
        }
      }
      btree_map::Entry::Occupied(mut slot) => {
        *slot.get_mut() ^= bits;
        if *slot.get() == 0 {
          slot.remove();
        }
      }
    }
  }
}

#[inline]
const fn split(var: Variable) -> (u64, u64) {
  (var.0 / WORD_BITS, 1u64 << (var.0 % WORD_BITS))
}

impl fmt::Debug for TermSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter().map(Variable::id)).finish()
  }
}

/// Ascending iterator over a [`TermSet`].
pub struct Iter<'a> {
  words: btree_map::Iter<'a, u64, u64>,
  base: u64,
  bits: u64,
}

impl Iterator for Iter<'_> {
  type Item = Variable;

  fn next(&mut self) -> Option<Variable> {
    while self.bits == 0 {
      let (&word, &bits) = self.words.next()?;
      self.base = word * WORD_BITS;
      self.bits = bits;
    }
    let low = u64::from(self.bits.trailing_zeros());
    // Clear the lowest set bit.
    self.bits &= self.bits - 1;
    Some(Variable(self.base + low))
  }
}

impl<'a> IntoIterator for &'a TermSet {
  type Item = Variable;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

/// Collects with toggle semantics: an id occurring an even number of times cancels.
impl FromIterator<Variable> for TermSet {
  fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
    let mut set = Self::empty();
    set.extend(iter);
    set
  }
}

impl Extend<Variable> for TermSet {
  fn extend<I: IntoIterator<Item = Variable>>(&mut self, iter: I) {
    for var in iter {
      self.toggle(var);
    }
  }
}

impl BitXorAssign<&TermSet> for TermSet {
  #[inline]
  fn bitxor_assign(&mut self, rhs: &TermSet) {
    self.merge(rhs);
  }
}

impl BitXor<&TermSet> for TermSet {
  type Output = TermSet;

  #[inline]
  fn bitxor(mut self, rhs: &TermSet) -> TermSet {
    self.merge(rhs);
    self
  }
}
