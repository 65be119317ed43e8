// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! A deterministic Pedersen vector commitment.
//!
//! Generators are derived from a fixed label, so any two parties that set up a key of
//! the same length obtain the same generators, and committing is a plain MSM without
//! blinding. This is what verification keys need: the commitments to the precomputed
//! polynomials are a deterministic function of the circuit.
use crate::{
  errors::FlavorError,
  field_conversion::FieldConvertible,
  provider::msm::msm,
  start_span,
  traits::{
    Engine,
    pcs::{CommitmentTrait, PCSEngineTrait},
  },
};
use core::marker::PhantomData;
use digest::{ExtendableOutput, Update};
use ff::Field;
use group::prime::PrimeCurveAffine;
use halo2curves::{Coordinates, CurveAffine, CurveExt};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha3::Shake256;
use std::{io::Read, time::Instant};
use tracing::{info, info_span};

const GENERATORS_LABEL: &[u8] = b"honk-flavor/pedersen-generators";

/// Derives `n` generators from `label` by hashing Shake256 output to the curve.
pub fn from_label<E: Engine>(label: &[u8], n: usize) -> Vec<E::Affine> {
  let mut shake = Shake256::default();
  shake.update(label);
  let mut reader = shake.finalize_xof();

  let uniform_bytes_vec = (0..n)
    .map(|_| {
      let mut uniform_bytes = [0u8; 32];
      reader.read_exact(&mut uniform_bytes).map(|_| uniform_bytes)
    })
    .collect::<Result<Vec<_>, _>>()
    // a Shake256 reader never runs dry
    .unwrap_or_default();

  uniform_bytes_vec
    .into_par_iter()
    .map(|bytes| {
      let hash = E::GE::hash_to_curve("from_uniform_bytes");
      E::Affine::from(hash(&bytes))
    })
    .collect()
}

/// A type that holds commitment generators
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CommitmentKey<E: Engine> {
  ck: Vec<E::Affine>,
}

impl<E: Engine> CommitmentKey<E> {
  /// Number of generators
  pub fn length(&self) -> usize {
    self.ck.len()
  }

  /// The generators
  pub fn bases(&self) -> &[E::Affine] {
    &self.ck
  }
}

/// A type that holds the generators a verifier checks openings against
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerifierKey<E: Engine> {
  gens: Vec<E::Affine>,
}

impl<E: Engine> VerifierKey<E> {
  /// Number of generators
  pub fn length(&self) -> usize {
    self.gens.len()
  }
}

/// A type that holds a commitment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Commitment<E: Engine> {
  comm: E::Affine,
}

impl<E: Engine> Commitment<E> {
  /// Wraps a curve point
  pub fn new(comm: E::Affine) -> Self {
    Commitment { comm }
  }

  /// Returns the committed point
  pub fn point(&self) -> E::Affine {
    self.comm
  }
}

impl<E: Engine> Default for Commitment<E> {
  fn default() -> Self {
    Commitment {
      comm: E::Affine::identity(),
    }
  }
}

// The point at infinity is encoded as (0, 0), which is not on either curve.
impl<E: Engine> FieldConvertible<E::Scalar> for Commitment<E> {
  const NUM_FIELDS: usize = 2 * <E::Base as FieldConvertible<E::Scalar>>::NUM_FIELDS;

  fn to_field_elements(&self) -> Vec<E::Scalar> {
    let coordinates: Option<Coordinates<E::Affine>> = self.comm.coordinates().into();
    let (x, y) = coordinates
      .map(|c| (*c.x(), *c.y()))
      .unwrap_or((E::Base::ZERO, E::Base::ZERO));
    let mut elements = <E::Base as FieldConvertible<E::Scalar>>::to_field_elements(&x);
    elements.extend(<E::Base as FieldConvertible<E::Scalar>>::to_field_elements(&y));
    elements
  }

  fn from_field_elements(elements: &[E::Scalar]) -> Result<Self, FlavorError> {
    if elements.len() != Self::NUM_FIELDS {
      return Err(FlavorError::InvalidFieldElements {
        reason: format!(
          "a commitment takes {} field elements, got {}",
          Self::NUM_FIELDS,
          elements.len()
        ),
      });
    }
    let (x, y) = elements.split_at(Self::NUM_FIELDS / 2);
    let x = <E::Base as FieldConvertible<E::Scalar>>::from_field_elements(x)?;
    let y = <E::Base as FieldConvertible<E::Scalar>>::from_field_elements(y)?;
    if bool::from(x.is_zero() & y.is_zero()) {
      return Ok(Self::default());
    }
    let comm = Option::from(E::Affine::from_xy(x, y)).ok_or(FlavorError::InvalidFieldElements {
      reason: "coordinates are not on the curve".to_string(),
    })?;
    Ok(Commitment { comm })
  }
}

impl<E: Engine> CommitmentTrait<E> for Commitment<E> {}

/// Provides the deterministic Pedersen commitment scheme
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedersenPCS<E: Engine> {
  _p: PhantomData<E>,
}

impl<E: Engine> PCSEngineTrait<E> for PedersenPCS<E> {
  type CommitmentKey = CommitmentKey<E>;
  type VerifierKey = VerifierKey<E>;
  type Commitment = Commitment<E>;

  fn setup_commitment_key(n: usize) -> Self::CommitmentKey {
    let (_setup_span, setup_t) = start_span!("pedersen_setup_commitment_key", n);
    let ck = from_label::<E>(GENERATORS_LABEL, n);
    info!(elapsed_ms = %setup_t.elapsed().as_millis(), n, "pedersen_setup_commitment_key");
    CommitmentKey { ck }
  }

  fn setup_verifier_key(n: usize) -> Self::VerifierKey {
    VerifierKey {
      gens: from_label::<E>(GENERATORS_LABEL, n),
    }
  }

  fn commitment_key_length(ck: &Self::CommitmentKey) -> usize {
    ck.length()
  }

  fn commit(ck: &Self::CommitmentKey, v: &[E::Scalar]) -> Result<Self::Commitment, FlavorError> {
    if v.len() > ck.ck.len() {
      return Err(FlavorError::InvalidVectorSize {
        actual: v.len(),
        max: ck.ck.len(),
      });
    }
    let comm = msm(v, &ck.ck[..v.len()])?;
    Ok(Commitment {
      comm: E::Affine::from(comm),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::provider::{Bn254Engine, GrumpkinEngine, bn254, grumpkin};
  use group::Curve;

  type BnPCS = PedersenPCS<Bn254Engine>;
  type GrumpkinPCS = PedersenPCS<GrumpkinEngine>;

  #[test]
  fn test_from_label_matches_serial() {
    let label = b"test_from_label";
    for n in [1, 2, 3, 17, 65] {
      let par = from_label::<Bn254Engine>(label, n);
      let mut shake = Shake256::default();
      shake.update(label);
      let mut reader = shake.finalize_xof();
      let serial: Vec<bn254::Affine> = (0..n)
        .map(|_| {
          let mut uniform_bytes = [0u8; 32];
          reader.read_exact(&mut uniform_bytes).unwrap();
          let hash = bn254::Point::hash_to_curve("from_uniform_bytes");
          hash(&uniform_bytes).to_affine()
        })
        .collect();
      assert_eq!(par, serial);
    }
  }

  #[test]
  fn test_setup_is_deterministic_and_prefix_stable() {
    let small = BnPCS::setup_commitment_key(8);
    let large = BnPCS::setup_commitment_key(16);
    assert_eq!(BnPCS::commitment_key_length(&small), 8);
    assert_eq!(small.bases(), &large.bases()[..8]);
    assert_eq!(BnPCS::setup_verifier_key(8).length(), 8);
  }

  #[test]
  fn test_commit_is_linear() {
    let ck = BnPCS::setup_commitment_key(4);
    let a: Vec<bn254::Scalar> = (1..=4u64).map(bn254::Scalar::from).collect();
    let b: Vec<bn254::Scalar> = (5..=8u64).map(bn254::Scalar::from).collect();
    let sum: Vec<bn254::Scalar> = a.iter().zip(&b).map(|(x, y)| *x + y).collect();

    let ca = BnPCS::commit(&ck, &a).unwrap().point();
    let cb = BnPCS::commit(&ck, &b).unwrap().point();
    let cs = BnPCS::commit(&ck, &sum).unwrap().point();
    assert_eq!((ca + cb).to_affine(), cs);
  }

  #[test]
  fn test_commit_rejects_oversized_vectors() {
    let ck = BnPCS::setup_commitment_key(2);
    let v = vec![bn254::Scalar::ONE; 3];
    assert_eq!(
      BnPCS::commit(&ck, &v),
      Err(FlavorError::InvalidVectorSize { actual: 3, max: 2 })
    );
  }

  #[test]
  fn test_zero_vector_commits_to_identity() {
    let ck = GrumpkinPCS::setup_commitment_key(4);
    let v = vec![grumpkin::Scalar::ZERO; 4];
    assert_eq!(GrumpkinPCS::commit(&ck, &v).unwrap(), Commitment::default());
  }

  #[test]
  fn test_commitment_field_elements() {
    let ck = BnPCS::setup_commitment_key(2);
    let c = BnPCS::commit(&ck, &[bn254::Scalar::from(3), bn254::Scalar::from(9)]).unwrap();
    let elements = c.to_field_elements();
    assert_eq!(elements.len(), 4);
    assert_eq!(Commitment::<Bn254Engine>::from_field_elements(&elements), Ok(c));

    let identity = Commitment::<Bn254Engine>::default();
    assert_eq!(identity.to_field_elements(), vec![bn254::Scalar::ZERO; 4]);
    assert_eq!(
      Commitment::<Bn254Engine>::from_field_elements(&identity.to_field_elements()),
      Ok(identity)
    );

    // grumpkin coordinates embed directly
    let gk = GrumpkinPCS::setup_commitment_key(1);
    let g = GrumpkinPCS::commit(&gk, &[grumpkin::Scalar::from(5)]).unwrap();
    assert_eq!(g.to_field_elements().len(), 2);
    assert_eq!(
      Commitment::<GrumpkinEngine>::from_field_elements(&g.to_field_elements()),
      Ok(g)
    );

    // a point off the curve is rejected
    let off_curve = vec![bn254::Scalar::ONE, bn254::Scalar::ZERO, bn254::Scalar::ONE, bn254::Scalar::ZERO];
    assert!(Commitment::<Bn254Engine>::from_field_elements(&off_curve).is_err());
  }
}
