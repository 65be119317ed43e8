// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! The Mega flavor: Ultra extended with an op queue for outsourced elliptic-curve
//! operations and a databus for calldata and return data.
use crate::{
  define_flavor_entities, impl_capabilities,
  polys::univariate::Univariate,
  provider::{Bn254Engine, bn254},
  relations::goblin::MegaRelations,
  traits::{EntityData, Flavor},
};

define_flavor_entities! {
  /// Selectors, copy-constraint and table polynomials of a Mega circuit
  precomputed MegaPrecomputedEntities {
    selectors: [
      q_m, q_c, q_l, q_r, q_o, q_4, q_busread, q_lookup, q_arith, q_delta_range, q_elliptic,
      q_aux, q_poseidon2_external, q_poseidon2_internal,
    ],
    sigmas: [sigma_1, sigma_2, sigma_3, sigma_4],
    ids: [id_1, id_2, id_3, id_4],
    tables: [table_1, table_2, table_3, table_4],
    lagrange: [lagrange_first, lagrange_last],
    goblin: [lagrange_ecc_op, databus_id],
  }
  /// Wires, op-queue wires, bus columns and the derived polynomials
  witness MegaWitnessEntities {
    wires: [w_l, w_r, w_o, w_4],
    derived: [z_perm, lookup_inverses, lookup_read_counts, lookup_read_tags],
    ecc_op_wires: [ecc_op_wire_1, ecc_op_wire_2, ecc_op_wire_3, ecc_op_wire_4],
    databus: [
      calldata, calldata_read_counts, calldata_inverses, return_data,
      return_data_read_counts, return_data_inverses,
    ],
  }
  /// Shifts of the wires and of the grand product
  shifted MegaShiftedEntities [w_l_shift, w_r_shift, w_o_shift, w_4_shift, z_perm_shift]
  /// Every entity of a Mega circuit
  all MegaAllEntities
  to_be_shifted [w_l, w_r, w_o, w_4, z_perm]
}

/// Edge univariates a sumcheck round extends every entity to
pub type ExtendedEdges = MegaAllEntities<
  Univariate<bn254::Scalar, { <MegaFlavor as Flavor>::MAX_PARTIAL_RELATION_LENGTH }>,
>;

/// Mega Honk over BN254
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MegaFlavor;

impl_capabilities!(MegaFlavor => UltraPlonkOrHonk, Honk, Ultra, Goblin, Folding);

impl Flavor for MegaFlavor {
  type E = Bn254Engine;
  type Relations = MegaRelations;
  type PrecomputedEntities<T: EntityData> = MegaPrecomputedEntities<T>;
  type WitnessEntities<T: EntityData> = MegaWitnessEntities<T>;
  type ShiftedEntities<T: EntityData> = MegaShiftedEntities<T>;
  type AllEntities<T: EntityData> = MegaAllEntities<T>;

  const NUM_WIRES: usize = 4;
}
