// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! This module implements the `Engine` trait for the curves flavors commit over:
//! BN254 for the Honk flavors and Grumpkin for ECCVM.
pub mod pedersen;

mod msm;

use crate::{provider::pedersen::PedersenPCS, traits::Engine};
use serde::{Deserialize, Serialize};

/// Re-exports that give access to the standard aliases used in the code base, for bn254
pub mod bn254 {
  pub use halo2curves::bn256::{Fq as Base, Fr as Scalar, G1 as Point, G1Affine as Affine};
}

/// Re-exports that give access to the standard aliases used in the code base, for grumpkin
pub mod grumpkin {
  pub use halo2curves::grumpkin::{Fq as Base, Fr as Scalar, G1 as Point, G1Affine as Affine};
}

/// An implementation of the `Engine` trait with BN254 curve and Pedersen commitment scheme
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bn254Engine;

/// An implementation of the `Engine` trait with Grumpkin curve and Pedersen commitment scheme
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GrumpkinEngine;

impl Engine for Bn254Engine {
  type Base = bn254::Base;
  type Scalar = bn254::Scalar;
  type GE = bn254::Point;
  type Affine = bn254::Affine;
  type PCS = PedersenPCS<Self>;
}

impl Engine for GrumpkinEngine {
  type Base = grumpkin::Base;
  type Scalar = grumpkin::Scalar;
  type GE = grumpkin::Point;
  type Affine = grumpkin::Affine;
  type PCS = PedersenPCS<Self>;
}

#[cfg(test)]
mod tests {
  use super::*;
  use ff::{Field, PrimeField};
  use halo2curves::{Coordinates, CurveAffine, CurveExt};

  fn assert_cycle<E1: Engine, E2: Engine<Scalar = E1::Base, Base = E1::Scalar>>() {}

  #[test]
  fn test_bn254_grumpkin_cycle() {
    assert_cycle::<Bn254Engine, GrumpkinEngine>();
    assert_cycle::<GrumpkinEngine, Bn254Engine>();
  }

  #[test]
  fn test_grumpkin_fields() {
    fn same_type<T>(_: T, _: T) {}
    // grumpkin's scalar field is the bn254 base field and vice versa
    same_type(grumpkin::Scalar::ONE, bn254::Base::ONE);
    same_type(grumpkin::Base::ONE, bn254::Scalar::ONE);
    assert_eq!(<grumpkin::Scalar as PrimeField>::S, 1);
    assert_eq!(<bn254::Scalar as PrimeField>::S, 28);

    let g = grumpkin::Affine::generator();
    let coordinates: Option<Coordinates<grumpkin::Affine>> = g.coordinates().into();
    assert!(coordinates.is_some());
  }

  #[test]
  fn test_generators_on_curve() {
    assert!(bool::from(bn254::Affine::generator().is_on_curve()));
    assert!(bool::from(grumpkin::Affine::generator().is_on_curve()));
    assert!(bool::from(
      bn254::Point::hash_to_curve("from_uniform_bytes")(&[7u8; 32]).is_on_curve()
    ));
  }
}
