// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Relations of the ECCVM, the circuit that executes an op queue of Grumpkin scalar
//! multiplications.
use crate::define_relation;

define_relation! {
  /// Transcript columns: op decoding and accumulator updates
  pub struct ECCVMTranscriptRelation {
    name: "ECCVMTranscript",
    partial: [
      8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8
    ],
    total: [
      8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8
    ],
  }
}

define_relation! {
  /// Precomputed multiples of each input point
  pub struct ECCVMPointTableRelation {
    name: "ECCVMPointTable",
    partial: [6, 6, 6, 6, 6, 6],
    total: [6, 6, 6, 6, 6, 6],
  }
}

define_relation! {
  /// Well-formedness of the windowed non-adjacent form slices
  pub struct ECCVMWnafRelation {
    name: "ECCVMWnaf",
    partial: [
      5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5
    ],
    total: [
      5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5
    ],
  }
}

define_relation! {
  /// Straus multi-scalar multiplication rounds
  pub struct ECCVMMSMRelation {
    name: "ECCVMMSM",
    partial: [
      8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
      8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8
    ],
    total: [
      8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
      8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8
    ],
  }
}

define_relation! {
  /// Multiset equality between the transcript, point table and MSM columns
  pub struct ECCVMSetRelation {
    name: "ECCVMSet",
    partial: [22, 3],
    total: [22, 3],
  }
}

define_relation! {
  /// Log-derivative lookup of MSM slices into the point table
  pub struct ECCVMLookupRelation {
    name: "ECCVMLookup",
    partial: [9, 9],
    total: [9, 9],
  }
}

define_relation! {
  /// Booleanity of the selector columns
  pub struct ECCVMBoolsRelation {
    name: "ECCVMBools",
    partial: [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    total: [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
  }
}

/// The relations of the ECCVM
pub type ECCVMRelations = crate::relations![
  ECCVMTranscriptRelation,
  ECCVMPointTableRelation,
  ECCVMWnafRelation,
  ECCVMMSMRelation,
  ECCVMSetRelation,
  ECCVMLookupRelation,
  ECCVMBoolsRelation,
];
