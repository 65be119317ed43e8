// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! The ECCVM flavor. Its circuit executes the op queue produced by Mega circuits, so
//! it commits over Grumpkin, whose scalar field is the BN254 base field.
use crate::{
  define_flavor_entities, impl_capabilities,
  polys::univariate::Univariate,
  provider::{GrumpkinEngine, grumpkin},
  relations::eccvm::ECCVMRelations,
  traits::{EntityData, Flavor},
};

define_flavor_entities! {
  /// Lagrange selectors; the ECCVM has no circuit-specific precomputed polynomials
  precomputed ECCVMPrecomputedEntities {
    lagrange: [lagrange_first, lagrange_second, lagrange_last],
  }
  /// Transcript, point-table and MSM columns, and the derived polynomials
  witness ECCVMWitnessEntities {
    transcript: [
      transcript_add, transcript_mul, transcript_eq, transcript_msm_transition, transcript_pc,
      transcript_msm_count, transcript_px, transcript_py, transcript_z1, transcript_z2,
      transcript_z1zero, transcript_z2zero, transcript_op, transcript_accumulator_x,
      transcript_accumulator_y, transcript_msm_x, transcript_msm_y,
      transcript_collision_check, transcript_accumulator_empty, transcript_reset_accumulator,
    ],
    precompute: [
      precompute_pc, precompute_point_transition, precompute_round, precompute_scalar_sum,
      precompute_s1hi, precompute_s1lo, precompute_s2hi, precompute_s2lo, precompute_s3hi,
      precompute_s3lo, precompute_s4hi, precompute_s4lo, precompute_skew, precompute_dx,
      precompute_dy, precompute_tx, precompute_ty, precompute_select,
    ],
    msm: [
      msm_transition, msm_add, msm_double, msm_skew, msm_accumulator_x, msm_accumulator_y,
      msm_pc, msm_size_of_msm, msm_count, msm_round, msm_add1, msm_add2, msm_add3, msm_add4,
      msm_x1, msm_x2, msm_x3, msm_x4, msm_y1, msm_y2, msm_y3, msm_y4, msm_collision_x1,
      msm_collision_x2, msm_collision_x3, msm_collision_x4, msm_lambda1, msm_lambda2,
      msm_lambda3, msm_lambda4, msm_slice1, msm_slice2, msm_slice3, msm_slice4,
    ],
    lookup: [lookup_read_counts_0, lookup_read_counts_1],
    derived: [z_perm, lookup_inverses],
  }
  /// Shifts of the columns whose relations read the next row
  shifted ECCVMShiftedEntities [
    transcript_mul_shift, transcript_msm_count_shift, transcript_accumulator_x_shift,
    transcript_accumulator_y_shift, precompute_scalar_sum_shift, precompute_s1hi_shift,
    precompute_dx_shift, precompute_dy_shift, precompute_tx_shift, precompute_ty_shift,
    msm_transition_shift, msm_add_shift, msm_double_shift, msm_skew_shift,
    msm_accumulator_x_shift, msm_accumulator_y_shift, msm_count_shift, msm_round_shift,
    msm_add1_shift, msm_pc_shift, precompute_pc_shift, transcript_pc_shift,
    precompute_round_shift, transcript_accumulator_empty_shift, precompute_select_shift,
    z_perm_shift,
  ]
  /// Every entity of the ECCVM
  all ECCVMAllEntities
  to_be_shifted [
    transcript_mul, transcript_msm_count, transcript_accumulator_x, transcript_accumulator_y,
    precompute_scalar_sum, precompute_s1hi, precompute_dx, precompute_dy, precompute_tx,
    precompute_ty, msm_transition, msm_add, msm_double, msm_skew, msm_accumulator_x,
    msm_accumulator_y, msm_count, msm_round, msm_add1, msm_pc, precompute_pc, transcript_pc,
    precompute_round, transcript_accumulator_empty, precompute_select, z_perm,
  ]
}

/// Edge univariates a sumcheck round extends every entity to
pub type ExtendedEdges = ECCVMAllEntities<
  Univariate<grumpkin::Scalar, { <ECCVMFlavor as Flavor>::MAX_PARTIAL_RELATION_LENGTH }>,
>;

/// The ECCVM over Grumpkin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ECCVMFlavor;

impl_capabilities!(ECCVMFlavor => Grumpkin);

impl Flavor for ECCVMFlavor {
  type E = GrumpkinEngine;
  type Relations = ECCVMRelations;
  type PrecomputedEntities<T: EntityData> = ECCVMPrecomputedEntities<T>;
  type WitnessEntities<T: EntityData> = ECCVMWitnessEntities<T>;
  type ShiftedEntities<T: EntityData> = ECCVMShiftedEntities<T>;
  type AllEntities<T: EntityData> = ECCVMAllEntities<T>;

  // every witness column except the grand product and the lookup inverses
  const NUM_WIRES: usize = 74;
}
