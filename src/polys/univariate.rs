// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! `Univariate`: a univariate polynomial in evaluation form over the points
//! `{0, 1, ..., LENGTH - 1}`.
//!
//! These are the elements of the sumcheck and Protogalaxy accumulators. The optional
//! `SKIP_COUNT` marks the evaluations at indices `1..=SKIP_COUNT` as not computed, which
//! folding accumulators use when those points are known to evaluate to zero.
use ff::{BatchInvert, PrimeField};
use std::ops::{Add, AddAssign, Mul, MulAssign, RangeInclusive, Sub, SubAssign};

/// A univariate polynomial represented by its evaluations on `{0, ..., LENGTH - 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Univariate<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize = 0> {
  /// Evaluations at `0, 1, ..., LENGTH - 1`
  pub evaluations: [F; LENGTH],
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> Default
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  fn default() -> Self {
    Self::zero()
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> Univariate<F, LENGTH, SKIP_COUNT> {
  /// The zero polynomial
  pub fn zero() -> Self {
    Univariate {
      evaluations: [F::ZERO; LENGTH],
    }
  }

  /// Wraps the evaluations at `0..LENGTH`
  pub fn new(evaluations: [F; LENGTH]) -> Self {
    Univariate { evaluations }
  }

  /// Returns the evaluation at the domain point `i`
  pub fn value_at(&self, i: usize) -> F {
    self.evaluations[i]
  }

  /// Indices whose evaluations accumulators may leave uncomputed
  pub fn skipped_indices(&self) -> RangeInclusive<usize> {
    1..=SKIP_COUNT
  }

  fn computed_indices() -> impl Iterator<Item = usize> {
    (0..LENGTH).filter(|i| *i == 0 || *i > SKIP_COUNT)
  }

  // skipped evaluations are zero
  fn computed_value(&self, i: usize) -> F {
    if self.skipped_indices().contains(&i) {
      F::ZERO
    } else {
      self.evaluations[i]
    }
  }

  /// Whether every computed evaluation is zero
  pub fn is_zero(&self) -> bool {
    Self::computed_indices().all(|i| bool::from(self.evaluations[i].is_zero()))
  }

  /// Evaluates the polynomial at an arbitrary point `u` with the barycentric formula.
  /// Skipped evaluations are taken to be zero.
  pub fn evaluate(&self, u: &F) -> F {
    if let Some(i) = (0..LENGTH).find(|i| F::from(*i as u64) == *u) {
      return self.computed_value(i);
    }

    // d_i = prod_{j != i} (i - j) * (u - i)
    let mut denominators: Vec<F> = (0..LENGTH)
      .map(|i| {
        let xi = F::from(i as u64);
        let weight = (0..LENGTH)
          .filter(|j| *j != i)
          .fold(F::ONE, |acc, j| acc * (xi - F::from(j as u64)));
        weight * (*u - xi)
      })
      .collect();
    denominators.iter_mut().batch_invert();

    let full_product = (0..LENGTH).fold(F::ONE, |acc, i| acc * (*u - F::from(i as u64)));
    let sum = (0..LENGTH)
      .zip(denominators.iter())
      .fold(F::ZERO, |acc, (i, inv)| acc + self.computed_value(i) * inv);
    sum * full_product
  }

  /// Extends the evaluations to the larger domain `{0, ..., N - 1}`. Skipped evaluations
  /// are zero in the result.
  pub fn extend_to<const N: usize>(&self) -> Univariate<F, N, SKIP_COUNT> {
    const { assert!(N >= LENGTH, "cannot extend a univariate to a smaller domain") };
    let mut evaluations = [F::ZERO; N];
    for (i, eval) in evaluations.iter_mut().enumerate() {
      *eval = if i < LENGTH {
        self.computed_value(i)
      } else {
        self.evaluate(&F::from(i as u64))
      };
    }
    Univariate { evaluations }
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> AddAssign<&Self>
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  fn add_assign(&mut self, rhs: &Self) {
    for i in Self::computed_indices() {
      self.evaluations[i] += rhs.evaluations[i];
    }
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> SubAssign<&Self>
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  fn sub_assign(&mut self, rhs: &Self) {
    for i in Self::computed_indices() {
      self.evaluations[i] -= rhs.evaluations[i];
    }
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> MulAssign<F>
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  fn mul_assign(&mut self, rhs: F) {
    for i in Self::computed_indices() {
      self.evaluations[i] *= rhs;
    }
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> Add
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  type Output = Self;

  fn add(mut self, rhs: Self) -> Self {
    self += &rhs;
    self
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> Sub
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  type Output = Self;

  fn sub(mut self, rhs: Self) -> Self {
    self -= &rhs;
    self
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> Mul<F>
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  type Output = Self;

  fn mul(mut self, rhs: F) -> Self {
    self *= rhs;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::provider::bn254::Scalar as Fr;
  use ff::Field;
  use rand::{SeedableRng, rngs::StdRng};

  // 3x^2 + 2x + 7
  fn quadratic(x: Fr) -> Fr {
    Fr::from(3) * x * x + Fr::from(2) * x + Fr::from(7)
  }

  fn sample<const N: usize>() -> Univariate<Fr, N> {
    Univariate::new(std::array::from_fn(|i| quadratic(Fr::from(i as u64))))
  }

  #[test]
  fn test_evaluate_on_and_off_domain() {
    let poly = sample::<3>();
    for i in 0..3u64 {
      assert_eq!(poly.evaluate(&Fr::from(i)), quadratic(Fr::from(i)));
    }

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
      let u = Fr::random(&mut rng);
      assert_eq!(poly.evaluate(&u), quadratic(u));
    }
  }

  #[test]
  fn test_extend_to_agrees_with_evaluate() {
    let poly = sample::<3>();
    let extended = poly.extend_to::<7>();
    assert_eq!(extended.evaluations[..3], poly.evaluations[..]);
    for i in 3..7u64 {
      assert_eq!(extended.value_at(i as usize), poly.evaluate(&Fr::from(i)));
      assert_eq!(extended.value_at(i as usize), quadratic(Fr::from(i)));
    }
    assert_eq!(extended, sample::<7>());
  }

  #[test]
  fn test_extend_to_ignores_skipped_evaluations() {
    // x * (x - 1) * (x - 2) vanishes on the skipped indices 1 and 2
    let cubic = |x: Fr| x * (x - Fr::ONE) * (x - Fr::from(2));
    let evals: [Fr; 4] = std::array::from_fn(|i| cubic(Fr::from(i as u64)));
    let clean = Univariate::<Fr, 4, 2>::new(evals);
    let mut dirty = clean;
    dirty.evaluations[1] = Fr::from(13);
    dirty.evaluations[2] = Fr::from(21);

    let extended = dirty.extend_to::<8>();
    assert_eq!(extended, clean.extend_to::<8>());
    for i in 0..8u64 {
      assert_eq!(extended.value_at(i as usize), cubic(Fr::from(i)));
    }
    assert_eq!(dirty.evaluate(&Fr::ONE), Fr::ZERO);
  }

  #[test]
  fn test_arithmetic() {
    let a = sample::<4>();
    let b = Univariate::<Fr, 4>::new([Fr::ONE; 4]);
    let sum = a + b;
    let diff = sum - b;
    assert_eq!(diff, a);
    let scaled = a * Fr::from(2);
    assert_eq!(scaled.value_at(1), Fr::from(24));
    assert!((a - a).is_zero());
    assert!(Univariate::<Fr, 5>::zero().is_zero());
    assert!(!a.is_zero());
  }

  #[test]
  fn test_skipped_indices() {
    let mut a = Univariate::<Fr, 5, 2>::zero();
    assert_eq!(a.skipped_indices(), 1..=2);
    assert!(Univariate::<Fr, 5>::zero().skipped_indices().is_empty());

    // values at skipped positions are ignored by arithmetic and by is_zero
    a.evaluations[1] = Fr::from(9);
    assert!(a.is_zero());
    let b = Univariate::<Fr, 5, 2>::new([Fr::ONE; 5]);
    let sum = a + b;
    assert_eq!(sum.value_at(0), Fr::ONE);
    assert_eq!(sum.value_at(1), Fr::from(9));
    assert_eq!(sum.value_at(3), Fr::ONE);
  }
}
