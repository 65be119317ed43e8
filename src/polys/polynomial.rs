// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! `Polynomial`: the owned coefficient vector stored for every precomputed and witness
//! entity of a proving key. One coefficient per execution-trace row.
use ff::PrimeField;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A dense polynomial with one coefficient per row of the execution trace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial<Scalar: PrimeField> {
  coeffs: Vec<Scalar>,
}

impl<Scalar: PrimeField> Polynomial<Scalar> {
  /// Allocates a zero polynomial with `size` coefficients
  pub fn new(size: usize) -> Self {
    Polynomial {
      coeffs: vec![Scalar::ZERO; size],
    }
  }

  /// Wraps existing coefficients
  pub fn from_coeffs(coeffs: Vec<Scalar>) -> Self {
    Polynomial { coeffs }
  }

  /// Number of coefficients
  pub fn len(&self) -> usize {
    self.coeffs.len()
  }

  /// Whether the polynomial has no coefficients
  pub fn is_empty(&self) -> bool {
    self.coeffs.is_empty()
  }

  /// Returns the coefficients
  pub fn coeffs(&self) -> &[Scalar] {
    &self.coeffs
  }

  /// Returns the coefficients mutably
  pub fn coeffs_mut(&mut self) -> &mut [Scalar] {
    &mut self.coeffs
  }

  /// Returns the view of the shifted polynomial, i.e. `coeffs[1..]`.
  ///
  /// Shifted polynomials are never materialised; a shift is a view of its source.
  pub fn shifted(&self) -> &[Scalar] {
    self.coeffs.get(1..).unwrap_or(&[])
  }

  /// Evaluates the polynomial in coefficient form at `x`
  pub fn evaluate(&self, x: &Scalar) -> Scalar {
    self
      .coeffs
      .iter()
      .rev()
      .fold(Scalar::ZERO, |acc, coeff| acc * x + coeff)
  }

  /// Evaluates the multilinear extension of the coefficients at `point`.
  ///
  /// The first coordinate of `point` binds the most significant bit of the index.
  pub fn evaluate_mle(&self, point: &[Scalar]) -> Scalar {
    assert_eq!(
      self.coeffs.len(),
      1 << point.len(),
      "the number of coefficients must be 2^{}",
      point.len()
    );

    let mut evals = self.coeffs.clone();
    for r in point {
      let n = evals.len() / 2;
      let (left, right) = evals.split_at_mut(n);
      left
        .par_iter_mut()
        .zip(right.par_iter())
        .for_each(|(a, b)| *a += *r * (*b - *a));
      evals.truncate(n);
    }
    evals[0]
  }
}
