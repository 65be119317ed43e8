// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! The AVM flavor. Its prover reads every polynomial straight from the proving key,
//! so keys of this flavor are built as [`UnionProvingKey`](crate::proving_key::UnionProvingKey).
use crate::{
  define_flavor_entities, impl_capabilities,
  provider::Bn254Engine,
  relations::avm::AvmRelations,
  traits::{EntityData, Flavor},
};

define_flavor_entities! {
  /// Main-trace clock and selectors
  precomputed AvmPrecomputedEntities {
    main: [main_clk, main_sel_first],
    selectors: [main_sel_alu, main_sel_mem, main_sel_rng_8, main_sel_rng_16],
  }
  /// ALU and memory chip columns and the interaction polynomials
  witness AvmWitnessEntities {
    alu: [alu_a, alu_b, alu_c, alu_op_add, alu_op_sub, alu_in_tag, alu_sel],
    memory: [mem_clk, mem_channel, mem_addr, mem_val, mem_tag, mem_rw, mem_sel],
    interactions: [perm_main_alu, perm_main_mem, lookup_byte_lengths, lookup_byte_lengths_counts],
  }
  /// Shifts of the memory trace columns
  shifted AvmShiftedEntities [mem_addr_shift, mem_clk_shift, mem_val_shift]
  /// Every entity of the AVM
  all AvmAllEntities
  to_be_shifted [mem_addr, mem_clk, mem_val]
}

/// The AVM over BN254
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvmFlavor;

impl_capabilities!(AvmFlavor =>);

impl Flavor for AvmFlavor {
  type E = Bn254Engine;
  type Relations = AvmRelations;
  type PrecomputedEntities<T: EntityData> = AvmPrecomputedEntities<T>;
  type WitnessEntities<T: EntityData> = AvmWitnessEntities<T>;
  type ShiftedEntities<T: EntityData> = AvmShiftedEntities<T>;
  type AllEntities<T: EntityData> = AvmAllEntities<T>;

  const NUM_WIRES: usize = 14;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    FF,
    entities::{Entities, ShiftableEntities},
    proving_key::UnionProvingKey,
  };
  use ff::Field;

  #[test]
  fn test_entity_counts() {
    assert_eq!(AvmFlavor::NUM_PRECOMPUTED_ENTITIES, 6);
    assert_eq!(AvmFlavor::NUM_WITNESS_ENTITIES, 18);
    assert_eq!(AvmFlavor::NUM_SHIFTED_ENTITIES, 3);
    assert_eq!(AvmFlavor::NUM_RELATIONS, 5);
    assert_eq!(AvmFlavor::MAX_TOTAL_RELATION_LENGTH, 5);
  }

  #[test]
  fn test_union_proving_key() {
    let mut pk = UnionProvingKey::<AvmFlavor>::new(1024, 3).unwrap();
    assert_eq!(pk.circuit_size, 1024);
    assert_eq!(pk.log_circuit_size, 10);
    assert_eq!(pk.num_public_inputs, 3);

    let labels = pk.get_labels();
    let polys = pk.get_all();
    assert_eq!(labels.len(), polys.len());
    assert_eq!(labels.len(), 24);
    assert_eq!(labels[0], "main_clk");
    assert_eq!(labels[6], "alu_a");
    assert!(polys.iter().all(|p| p.len() == 1024));

    // the union key lays out its polynomials like the unshifted entities
    let all = AvmAllEntities::<&'static str>::from_fn(|l| l);
    let unshifted: Vec<&str> = all.get_unshifted().to_vec();
    assert_eq!(labels, unshifted);

    assert_eq!(pk.get_selectors().len(), 4);
    assert_eq!(pk.get_precomputed_polynomials().len(), 6);
    assert_eq!(pk.get_witness_polynomials().len(), 18);

    pk.witness.mem_val_mut().coeffs_mut()[1] = FF::<AvmFlavor>::ONE;
    assert_eq!(pk.witness.mem_val().shifted()[0], FF::<AvmFlavor>::ONE);
  }
}
