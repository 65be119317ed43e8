// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! The multiplicative evaluation domain of a proving key.
use crate::{errors::FlavorError, math::Math};
use ff::PrimeField;
use serde::{Deserialize, Serialize};

/// A power-of-two evaluation domain over the scalar field `F`.
///
/// `root` is a primitive `size`-th root of unity. It is `None` for domains built
/// without roots (sumcheck-only flavors over fields of small two-adicity) and when
/// `log_size` exceeds the two-adicity of `F`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationDomain<F: PrimeField> {
  /// Number of points
  pub size: usize,
  /// `log2(size)`
  pub log_size: usize,
  /// `size` as a field element
  pub domain: F,
  /// Inverse of `domain`
  pub domain_inverse: F,
  /// Multiplicative generator of the field, used for coset shifts
  pub generator: F,
  /// Inverse of `generator`
  pub generator_inverse: F,
  /// Primitive `size`-th root of unity
  pub root: Option<F>,
  /// Inverse of `root`
  pub root_inverse: Option<F>,
}

impl<F: PrimeField> EvaluationDomain<F> {
  /// Builds the domain of `size` points, with roots of unity when the field has them.
  pub fn new(size: usize) -> Result<Self, FlavorError> {
    let mut domain = Self::new_without_roots(size)?;
    if domain.log_size <= F::S as usize {
      let root = (domain.log_size..F::S as usize).fold(F::ROOT_OF_UNITY, |r, _| r.square());
      domain.root = Some(root);
      domain.root_inverse = Option::from(root.invert());
    }
    Ok(domain)
  }

  /// Builds the domain of `size` points without roots of unity.
  pub fn new_without_roots(size: usize) -> Result<Self, FlavorError> {
    let log_size = size.exact_log_2()?;
    let domain = F::from(size as u64);
    let domain_inverse = Option::from(domain.invert()).ok_or(FlavorError::InternalError {
      reason: format!("domain size {size} is not invertible"),
    })?;
    let generator = F::MULTIPLICATIVE_GENERATOR;
    let generator_inverse =
      Option::from(generator.invert()).ok_or(FlavorError::InternalError {
        reason: "multiplicative generator is not invertible".to_string(),
      })?;

    Ok(EvaluationDomain {
      size,
      log_size,
      domain,
      domain_inverse,
      generator,
      generator_inverse,
      root: None,
      root_inverse: None,
    })
  }

  /// Returns the `size` powers of `root`, or an empty vector for a rootless domain.
  pub fn roots_of_unity(&self) -> Vec<F> {
    match self.root {
      Some(root) => std::iter::successors(Some(F::ONE), |w| Some(*w * root))
        .take(self.size)
        .collect(),
      None => Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::provider::{bn254, grumpkin};
  use ff::Field;

  #[test]
  fn test_bn254_domain_has_roots() {
    let domain = EvaluationDomain::<bn254::Scalar>::new(1024).unwrap();
    assert_eq!(domain.log_size, 10);
    assert_eq!(domain.domain * domain.domain_inverse, bn254::Scalar::ONE);

    let root = domain.root.unwrap();
    assert_eq!(root.pow_vartime([1024u64]), bn254::Scalar::ONE);
    assert_ne!(root.pow_vartime([512u64]), bn254::Scalar::ONE);
    assert_eq!(root * domain.root_inverse.unwrap(), bn254::Scalar::ONE);

    let roots = domain.roots_of_unity();
    assert_eq!(roots.len(), 1024);
    assert_eq!(roots[0], bn254::Scalar::ONE);
    assert_eq!(roots[1], root);
  }

  #[test]
  fn test_small_two_adicity_has_no_roots() {
    // Grumpkin's scalar field has two-adicity 1
    let domain = EvaluationDomain::<grumpkin::Scalar>::new(1024).unwrap();
    assert!(domain.root.is_none());
    assert!(domain.roots_of_unity().is_empty());

    let rootless = EvaluationDomain::<bn254::Scalar>::new_without_roots(16).unwrap();
    assert!(rootless.root.is_none());
  }

  #[test]
  fn test_rejects_invalid_sizes() {
    assert_eq!(
      EvaluationDomain::<bn254::Scalar>::new(0),
      Err(FlavorError::InvalidCircuitSize { size: 0 })
    );
    assert_eq!(
      EvaluationDomain::<bn254::Scalar>::new(3),
      Err(FlavorError::InvalidCircuitSize { size: 3 })
    );
  }
}
