// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! This module defines the traits a flavor is assembled from.
use crate::{
  capabilities::Classified,
  entities::{Entities, ShiftableEntities},
  field_conversion::FieldConvertible,
  relation_shape::RelationSet,
};
use core::fmt::Debug;
use ff::PrimeField;
use halo2curves::{CurveAffine, CurveExt};
use serde::{Deserialize, Serialize};

pub mod pcs;
pub mod relation;

use pcs::PCSEngineTrait;

/// A collection of engines that are required by the library
pub trait Engine: Clone + Copy + Debug + Send + Sync + Sized + Eq + PartialEq + 'static {
  /// A type representing an element of the base field of the group
  type Base: PrimeField + FieldConvertible<Self::Scalar> + Serialize + for<'de> Deserialize<'de>;

  /// A type representing an element of the scalar field of the group
  type Scalar: PrimeField + FieldConvertible<Self::Scalar> + Serialize + for<'de> Deserialize<'de>;

  /// A type that represents an element of the group, in projective form
  type GE: CurveExt<ScalarExt = Self::Scalar, Base = Self::Base, AffineExt = Self::Affine>;

  /// A type that represents an element of the group, in affine form
  type Affine: CurveAffine<ScalarExt = Self::Scalar, Base = Self::Base, CurveExt = Self::GE>
    + Serialize
    + for<'de> Deserialize<'de>;

  /// The polynomial commitment scheme committing over the group
  type PCS: PCSEngineTrait<Self>;
}

/// Bounds shared by every kind of data stored in an entity collection
pub trait EntityData: Clone + Debug + Send + Sync {}

impl<T: Clone + Debug + Send + Sync> EntityData for T {}

/// A flavor: the static description of one proof-system variant.
///
/// It fixes the curve and commitment scheme, the relation list, and the four entity
/// layouts. The entity collections are generic over the data they hold so that one
/// layout serves polynomials, commitments, evaluations and univariates alike.
pub trait Flavor: Classified + Clone + Copy + Debug + Default + Send + Sync + 'static {
  /// The curve and commitment scheme
  type E: Engine;

  /// The relations checked by the flavor, as a cons list (see [`crate::relations!`])
  type Relations: RelationSet;

  /// Selectors, permutation and lookup-table polynomials fixed by the circuit
  type PrecomputedEntities<T: EntityData>: Entities<DataType = T> + Clone + Debug + Send + Sync;

  /// Polynomials computed by the prover from a witness
  type WitnessEntities<T: EntityData>: Entities<DataType = T> + Clone + Debug + Send + Sync;

  /// Left-shifts of the to-be-shifted entities
  type ShiftedEntities<T: EntityData>: Entities<DataType = T> + Clone + Debug + Send + Sync;

  /// Precomputed, witness and shifted entities, in that order
  type AllEntities<T: EntityData>: ShiftableEntities
    + Entities<DataType = T>
    + Clone
    + Debug
    + Send
    + Sync;

  /// Number of wires of the arithmetization
  const NUM_WIRES: usize;

  /// Number of precomputed entities
  const NUM_PRECOMPUTED_ENTITIES: usize = <Self::PrecomputedEntities<()> as Entities>::LEN;

  /// Number of witness entities
  const NUM_WITNESS_ENTITIES: usize = <Self::WitnessEntities<()> as Entities>::LEN;

  /// Number of shifted entities
  const NUM_SHIFTED_ENTITIES: usize = <Self::ShiftedEntities<()> as Entities>::LEN;

  /// Number of entities of the "all" collection
  const NUM_ALL_ENTITIES: usize = <Self::AllEntities<()> as Entities>::LEN;

  /// Number of relations
  const NUM_RELATIONS: usize = <Self::Relations as RelationSet>::NUM_RELATIONS;

  /// Maximum partial length over every subrelation of every relation
  const MAX_PARTIAL_RELATION_LENGTH: usize =
    <Self::Relations as RelationSet>::MAX_PARTIAL_RELATION_LENGTH;

  /// Maximum total length over every subrelation of every relation
  const MAX_TOTAL_RELATION_LENGTH: usize =
    <Self::Relations as RelationSet>::MAX_TOTAL_RELATION_LENGTH;

  /// Length of the batched sumcheck round univariate (one more for the pow factor)
  const BATCHED_RELATION_PARTIAL_LENGTH: usize = Self::MAX_PARTIAL_RELATION_LENGTH + 1;

  /// Length of the batched Protogalaxy univariate
  const BATCHED_RELATION_TOTAL_LENGTH: usize = Self::MAX_TOTAL_RELATION_LENGTH + 1;

  /// Number of subrelations over every relation
  const NUM_SUBRELATIONS: usize = <Self::Relations as RelationSet>::NUMBER_OF_SUBRELATIONS;
}

/// A circuit builder a recursive verifier is instantiated over
pub trait CircuitBuilder: Clone + Copy + Debug + Default + Send + Sync + 'static {
  /// Name of the builder
  const NAME: &'static str;
}

/// A flavor that verifies a proof of `NativeFlavor` inside a circuit built with `Builder`
pub trait RecursiveFlavor: Classified {
  /// The flavor whose proofs are verified
  type NativeFlavor: Classified;

  /// The builder the verifier circuit is written with
  type Builder: CircuitBuilder;
}
