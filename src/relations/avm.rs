// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Relations of the AVM: ALU and memory chips, and the interactions tying them to
//! the main trace.
use crate::define_relation;

define_relation! {
  /// ALU operation decoding and tag consistency
  pub struct AluRelation {
    name: "Alu",
    partial: [3, 3, 4],
    total: [3, 3, 4],
  }
}

define_relation! {
  /// Memory trace ordering and read-after-write consistency
  pub struct MemoryRelation {
    name: "Memory",
    partial: [3, 3, 4, 3],
    total: [3, 3, 4, 3],
  }
}

define_relation! {
  /// Permutation between main-trace ALU rows and the ALU chip
  pub struct PermMainAluRelation {
    name: "PermMainAlu",
    partial: [3, 3],
    total: [5, 3],
  }
}

define_relation! {
  /// Permutation between main-trace memory accesses and the memory chip
  pub struct PermMainMemRelation {
    name: "PermMainMem",
    partial: [3, 3],
    total: [5, 3],
  }
}

define_relation! {
  /// Lookup of byte lengths by memory tag
  pub struct LookupByteLengthsRelation {
    name: "LookupByteLengths",
    partial: [4, 4],
    total: [4, 4],
  }
}

/// The relations of the AVM
pub type AvmRelations = crate::relations![
  AluRelation,
  MemoryRelation,
  PermMainAluRelation,
  PermMainMemRelation,
  LookupByteLengthsRelation,
];
