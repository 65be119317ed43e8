// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Relations added on top of Ultra by the op-queue capable (Mega) arithmetization.
use crate::{
  define_relation,
  relations::ultra::{
    ArithmeticRelation, AuxiliaryRelation, DeltaRangeConstraintRelation, EllipticRelation,
    LogDerivLookupRelation, PermutationRelation, Poseidon2ExternalRelation,
    Poseidon2InternalRelation,
  },
};

define_relation! {
  /// Ties the op-queue wires to the first rows of the ordinary wires and forces them
  /// to zero elsewhere
  pub struct EccOpQueueRelation {
    name: "EccOpQueue",
    partial: [3, 3, 3, 3, 3, 3, 3, 3],
    total: [3, 3, 3, 3, 3, 3, 3, 3],
  }
}

define_relation! {
  /// Log-derivative lookups of the calldata and return-data bus columns. Each column
  /// contributes an inverse-correctness and a lookup subrelation.
  pub struct DatabusLookupRelation {
    name: "DatabusLookup",
    partial: [5, 3, 5, 3],
    total: [5, 3, 5, 3],
  }
}

/// The relations of the Mega arithmetization
pub type MegaRelations = crate::relations![
  ArithmeticRelation,
  PermutationRelation,
  LogDerivLookupRelation,
  DeltaRangeConstraintRelation,
  EllipticRelation,
  AuxiliaryRelation,
  EccOpQueueRelation,
  DatabusLookupRelation,
  Poseidon2ExternalRelation,
  Poseidon2InternalRelation,
];
