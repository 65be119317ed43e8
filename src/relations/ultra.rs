// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Relations of the Ultra arithmetization.
use crate::define_relation;

define_relation! {
  /// Arithmetic gates, including the mini-addition gate on the shifted fourth wire
  pub struct ArithmeticRelation {
    name: "Arithmetic",
    partial: [6, 5],
    total: [6, 5],
  }
}

define_relation! {
  /// Grand-product copy constraints. The grand product subrelation depends on the
  /// relation parameters beta and gamma, hence its larger total length.
  pub struct PermutationRelation {
    name: "Permutation",
    partial: [6, 3],
    total: [11, 3],
  }
}

define_relation! {
  /// Log-derivative lookup into the fixed tables
  pub struct LogDerivLookupRelation {
    name: "LogDerivLookup",
    partial: [5, 5],
    total: [5, 5],
  }
}

define_relation! {
  /// Small-range checks on consecutive wire differences
  pub struct DeltaRangeConstraintRelation {
    name: "DeltaRangeConstraint",
    partial: [6, 6, 6, 6],
    total: [6, 6, 6, 6],
  }
}

define_relation! {
  /// Short Weierstrass point addition and doubling
  pub struct EllipticRelation {
    name: "Elliptic",
    partial: [6, 6],
    total: [6, 6],
  }
}

define_relation! {
  /// Limb accumulation, non-native field arithmetic and memory records
  pub struct AuxiliaryRelation {
    name: "Auxiliary",
    partial: [6, 6, 6, 6, 6, 6],
    total: [6, 6, 6, 6, 6, 6],
  }
}

define_relation! {
  /// Full rounds of the Poseidon2 permutation
  pub struct Poseidon2ExternalRelation {
    name: "Poseidon2External",
    partial: [7, 7, 7, 7],
    total: [7, 7, 7, 7],
  }
}

define_relation! {
  /// Partial rounds of the Poseidon2 permutation
  pub struct Poseidon2InternalRelation {
    name: "Poseidon2Internal",
    partial: [7, 7, 7, 7],
    total: [7, 7, 7, 7],
  }
}

/// The relations of the Ultra arithmetization, in the order they are batched
pub type UltraRelations = crate::relations![
  ArithmeticRelation,
  PermutationRelation,
  LogDerivLookupRelation,
  DeltaRangeConstraintRelation,
  EllipticRelation,
  AuxiliaryRelation,
  Poseidon2ExternalRelation,
  Poseidon2InternalRelation,
];

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{relation_shape::RelationSet, traits::relation::Relation};

  #[test]
  fn test_ultra_relation_set() {
    assert_eq!(UltraRelations::NUM_RELATIONS, 8);
    assert_eq!(UltraRelations::MAX_PARTIAL_RELATION_LENGTH, 7);
    assert_eq!(UltraRelations::MAX_TOTAL_RELATION_LENGTH, 11);
    assert_eq!(UltraRelations::NUMBER_OF_SUBRELATIONS, 2 + 2 + 2 + 4 + 2 + 6 + 4 + 4);
    assert_eq!(
      UltraRelations::names(),
      vec![
        "Arithmetic",
        "Permutation",
        "LogDerivLookup",
        "DeltaRangeConstraint",
        "Elliptic",
        "Auxiliary",
        "Poseidon2External",
        "Poseidon2Internal",
      ]
    );
    assert_eq!(PermutationRelation::TOTAL_RELATION_LENGTH, 11);
    assert_eq!(PermutationRelation::RELATION_LENGTH, 6);
  }
}
