// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Multi-scalar multiplication used to commit to polynomials.
//! Bucket method adapted from halo2. Zero and one coefficients are common in freshly
//! allocated and selector polynomials and are handled outside the buckets.
use crate::{errors::FlavorError, start_span};
use ff::{Field, PrimeField};
use group::Group;
use halo2curves::CurveAffine;
use rayon::{current_num_threads, prelude::*};
use std::time::Instant;
use tracing::{debug, info_span};

#[derive(Clone, Copy)]
enum Bucket<C: CurveAffine> {
  None,
  Affine(C),
  Projective(C::Curve),
}

impl<C: CurveAffine> Bucket<C> {
  fn add_assign(&mut self, other: &C) {
    *self = match *self {
      Bucket::None => Bucket::Affine(*other),
      Bucket::Affine(a) => Bucket::Projective(a + *other),
      Bucket::Projective(a) => Bucket::Projective(a + other),
    }
  }

  fn add(self, other: C::Curve) -> C::Curve {
    match self {
      Bucket::None => other,
      Bucket::Affine(a) => other + a,
      Bucket::Projective(a) => other + a,
    }
  }
}

// `c`-bit window of a little-endian scalar encoding
fn window<F: PrimeField>(segment: usize, c: usize, repr: &F::Repr) -> usize {
  let bytes = repr.as_ref();
  let skip_bits = segment * c;
  let skip_bytes = skip_bits / 8;
  if skip_bytes >= bytes.len() {
    return 0;
  }

  let mut word = [0u8; 8];
  for (w, b) in word.iter_mut().zip(bytes[skip_bytes..].iter()) {
    *w = *b;
  }
  let shifted = u64::from_le_bytes(word) >> (skip_bits - skip_bytes * 8);
  (shifted % (1 << c)) as usize
}

fn msm_serial<C: CurveAffine>(coeffs: &[C::Scalar], bases: &[C]) -> C::Curve {
  let mut ones = C::Curve::identity();
  let mut others = Vec::new();
  for (s, b) in coeffs.iter().zip(bases) {
    if *s == C::Scalar::ONE {
      ones += b;
    } else if !bool::from(s.is_zero()) {
      others.push((s.to_repr(), *b));
    }
  }
  if others.is_empty() {
    return ones;
  }

  let c = if others.len() < 4 {
    1
  } else if others.len() < 32 {
    3
  } else {
    (f64::from(others.len() as u32)).ln().ceil() as usize
  };
  let num_bits = C::Scalar::NUM_BITS as usize;
  let segments = num_bits.div_ceil(c);

  let windowed = (0..segments)
    .rev()
    .fold(C::Curve::identity(), |mut acc, segment| {
      for _ in 0..c {
        acc = acc.double();
      }

      let mut buckets = vec![Bucket::None; (1 << c) - 1];
      for (repr, base) in others.iter() {
        let digit = window::<C::Scalar>(segment, c, repr);
        if digit != 0 {
          buckets[digit - 1].add_assign(base);
        }
      }

      // running sums weight bucket i by i + 1
      let mut running_sum = C::Curve::identity();
      for bucket in buckets.into_iter().rev() {
        running_sum = bucket.add(running_sum);
        acc += &running_sum;
      }
      acc
    });

  ones + windowed
}

/// Computes `sum_i coeffs[i] * bases[i]`, splitting large inputs across the rayon pool.
pub fn msm<C: CurveAffine>(coeffs: &[C::Scalar], bases: &[C]) -> Result<C::Curve, FlavorError> {
  let (_msm_span, msm_t) = start_span!("msm", size = coeffs.len());
  if coeffs.len() != bases.len() {
    return Err(FlavorError::InvalidVectorSize {
      actual: coeffs.len(),
      max: bases.len(),
    });
  }

  let num_threads = if coeffs.len() > 1024 {
    current_num_threads()
  } else {
    1
  };
  let result = if num_threads > 1 {
    let chunk = coeffs.len().div_ceil(num_threads);
    coeffs
      .par_chunks(chunk)
      .zip(bases.par_chunks(chunk))
      .map(|(coeffs, bases)| msm_serial(coeffs, bases))
      .reduce(C::Curve::identity, |sum, evl| sum + evl)
  } else {
    msm_serial(coeffs, bases)
  };

  debug!(elapsed_ms = %msm_t.elapsed().as_millis(), size = coeffs.len(), "msm");
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::provider::{bn254, grumpkin};
  use ff::Field;
  use group::Curve;
  use rand::{SeedableRng, rngs::StdRng};

  fn test_msm_with<F: PrimeField, A: CurveAffine<ScalarExt = F>>(n: usize) {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let mut coeffs = (0..n).map(|_| F::random(&mut rng)).collect::<Vec<_>>();
    // exercise the shortcut paths
    if n > 2 {
      coeffs[0] = F::ZERO;
      coeffs[1] = F::ONE;
    }
    let bases = (0..n)
      .map(|_| (A::generator() * F::random(&mut rng)).to_affine())
      .collect::<Vec<_>>();

    let naive = coeffs
      .iter()
      .zip(bases.iter())
      .fold(A::CurveExt::identity(), |acc, (coeff, base)| {
        acc + *base * coeff
      });
    assert_eq!(naive, msm(&coeffs, &bases).unwrap());
  }

  #[test]
  fn test_msm() {
    for n in [1, 3, 8, 40, 1100] {
      test_msm_with::<bn254::Scalar, bn254::Affine>(n);
    }
    test_msm_with::<grumpkin::Scalar, grumpkin::Affine>(40);
  }

  #[test]
  fn test_msm_rejects_mismatched_lengths() {
    let bases = vec![bn254::Affine::generator(); 2];
    assert_eq!(
      msm(&[bn254::Scalar::ONE], &bases),
      Err(FlavorError::InvalidVectorSize { actual: 1, max: 2 })
    );
  }

  #[test]
  fn test_msm_of_zeros_is_identity() {
    let bases = vec![bn254::Affine::generator(); 16];
    let zeros = vec![bn254::Scalar::ZERO; 16];
    assert_eq!(msm(&zeros, &bases).unwrap(), bn254::Point::identity());
  }
}
