// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! The Ultra flavors over BN254.
//!
//! `UltraKeccakFlavor` shares every entity layout and relation with `UltraFlavor`; the
//! two differ only in the transcript hash of the prover, which is outside this crate.
use crate::{
  define_flavor_entities, impl_capabilities,
  polys::univariate::Univariate,
  provider::{Bn254Engine, bn254},
  relations::ultra::UltraRelations,
  traits::{EntityData, Flavor},
};

define_flavor_entities! {
  /// Selectors, copy-constraint and table polynomials of an Ultra circuit
  precomputed UltraPrecomputedEntities {
    selectors: [
      q_m, q_c, q_l, q_r, q_o, q_4, q_lookup, q_arith, q_delta_range, q_elliptic, q_aux,
      q_poseidon2_external, q_poseidon2_internal,
    ],
    sigmas: [sigma_1, sigma_2, sigma_3, sigma_4],
    ids: [id_1, id_2, id_3, id_4],
    tables: [table_1, table_2, table_3, table_4],
    lagrange: [lagrange_first, lagrange_last],
  }
  /// Wires and the polynomials derived from them during proving
  witness UltraWitnessEntities {
    wires: [w_l, w_r, w_o, w_4],
    derived: [z_perm, lookup_inverses, lookup_read_counts, lookup_read_tags],
  }
  /// Shifts of the wires and of the grand product
  shifted UltraShiftedEntities [w_l_shift, w_r_shift, w_o_shift, w_4_shift, z_perm_shift]
  /// Every entity of an Ultra circuit
  all UltraAllEntities
  to_be_shifted [w_l, w_r, w_o, w_4, z_perm]
}

/// Edge univariates a sumcheck round extends every entity to
pub type ExtendedEdges = UltraAllEntities<
  Univariate<bn254::Scalar, { <UltraFlavor as Flavor>::MAX_PARTIAL_RELATION_LENGTH }>,
>;

/// Ultra Honk over BN254, with a Poseidon2 transcript
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UltraFlavor;

/// Ultra Honk over BN254, with a Keccak transcript for EVM verification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UltraKeccakFlavor;

impl_capabilities!(UltraFlavor => UltraPlonkOrHonk, Honk, Ultra, Folding);
impl_capabilities!(UltraKeccakFlavor => UltraPlonk, UltraPlonkOrHonk, Honk, Ultra, Folding);

macro_rules! impl_ultra_flavor {
  ($($flavor:ty),*) => {
    $(
      impl Flavor for $flavor {
        type E = Bn254Engine;
        type Relations = UltraRelations;
        type PrecomputedEntities<T: EntityData> = UltraPrecomputedEntities<T>;
        type WitnessEntities<T: EntityData> = UltraWitnessEntities<T>;
        type ShiftedEntities<T: EntityData> = UltraShiftedEntities<T>;
        type AllEntities<T: EntityData> = UltraAllEntities<T>;

        const NUM_WIRES: usize = 4;
      }
    )*
  };
}

impl_ultra_flavor!(UltraFlavor, UltraKeccakFlavor);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{entities::Entities, relation_shape::ShapedContainer};

  #[test]
  fn test_entity_counts() {
    assert_eq!(UltraFlavor::NUM_PRECOMPUTED_ENTITIES, 27);
    assert_eq!(UltraFlavor::NUM_WITNESS_ENTITIES, 8);
    assert_eq!(UltraFlavor::NUM_SHIFTED_ENTITIES, 5);
    assert_eq!(UltraFlavor::NUM_ALL_ENTITIES, 40);
    assert_eq!(UltraKeccakFlavor::NUM_ALL_ENTITIES, UltraFlavor::NUM_ALL_ENTITIES);
  }

  #[test]
  fn test_relation_lengths() {
    assert_eq!(UltraFlavor::NUM_RELATIONS, 8);
    assert_eq!(UltraFlavor::MAX_PARTIAL_RELATION_LENGTH, 7);
    assert_eq!(UltraFlavor::BATCHED_RELATION_PARTIAL_LENGTH, 8);
    assert_eq!(UltraFlavor::MAX_TOTAL_RELATION_LENGTH, 11);
    assert_eq!(UltraFlavor::BATCHED_RELATION_TOTAL_LENGTH, 12);
    assert_eq!(UltraFlavor::NUM_SUBRELATIONS, 26);
  }

  #[test]
  fn test_wire_and_selector_groups() {
    let labels = UltraPrecomputedEntities::<usize>::from_fn(|l| l.len());
    assert_eq!(labels.get_selectors().len(), 13);
    assert_eq!(*labels.q_poseidon2_internal(), "q_poseidon2_internal".len());

    let all = UltraAllEntities::<&'static str>::from_fn(|l| l);
    assert_eq!(all.get_wires(), &["w_l", "w_r", "w_o", "w_4"]);
    assert_eq!(all.get_wires().len(), UltraFlavor::NUM_WIRES);
    assert_eq!(*all.z_perm_shift(), "z_perm_shift");
  }

  #[test]
  fn test_extended_edges() {
    let edges = ExtendedEdges::default();
    assert_eq!(edges.get_all().len(), UltraFlavor::NUM_ALL_ENTITIES);
    assert_eq!(edges.w_l().lengths(), vec![UltraFlavor::MAX_PARTIAL_RELATION_LENGTH]);
    assert!(edges.get_all().iter().all(|e| e.is_zero()));
  }
}
