// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Proving keys.
//!
//! `ProvingKey` holds the circuit metadata, the evaluation domain and the shared
//! commitment key. `UnionProvingKey` additionally owns every precomputed and witness
//! polynomial of the flavor, as used by flavors whose prover reads them straight from
//! the key.
use crate::{
  CommitmentKey, FF, PCS,
  capabilities::is_grumpkin_flavor,
  entities::Entities,
  errors::FlavorError,
  math::Math,
  polys::{domain::EvaluationDomain, polynomial::Polynomial},
  start_span,
  traits::{Flavor, pcs::PCSEngineTrait},
};
use std::{ops::Deref, sync::Arc, time::Instant};
use tracing::{debug, info, info_span};

/// Number of public inputs that carry a recursive-proof aggregation object
pub const RECURSIVE_PROOF_PUBLIC_INPUT_SIZE: usize = 16;

/// Public-input indices of a recursive-proof aggregation object
pub type RecursiveProofPublicInputIndices = [u32; RECURSIVE_PROOF_PUBLIC_INPUT_SIZE];

/// The proving key of a circuit of flavor `F`
#[derive(Clone, Debug)]
pub struct ProvingKey<F: Flavor> {
  /// Number of rows of the execution trace, a power of two
  pub circuit_size: usize,
  /// `log2(circuit_size)`
  pub log_circuit_size: usize,
  /// Number of public inputs
  pub num_public_inputs: usize,
  /// Offset of the public inputs from the start of the execution trace
  pub pub_inputs_offset: usize,
  /// Whether the public inputs carry a recursive-proof aggregation object
  pub contains_recursive_proof: bool,
  /// Where the aggregation object sits among the public inputs
  pub recursive_proof_public_input_indices: RecursiveProofPublicInputIndices,
  /// Evaluation domain over the circuit size
  pub evaluation_domain: EvaluationDomain<FF<F>>,
  /// Commitment key able to commit to `circuit_size + 1` coefficients
  pub commitment_key: Arc<CommitmentKey<F>>,
  /// Public input values
  pub public_inputs: Vec<FF<F>>,
}

impl<F: Flavor> ProvingKey<F> {
  /// Creates the key of a circuit with `circuit_size` rows and `num_public_inputs`
  /// public inputs, setting up a fresh commitment key.
  pub fn new(circuit_size: usize, num_public_inputs: usize) -> Result<Self, FlavorError> {
    let (_pk_span, pk_t) = start_span!("proving_key_new", circuit_size, num_public_inputs);
    // validate before paying for the commitment key setup
    circuit_size.exact_log_2()?;
    let commitment_key = Arc::new(PCS::<F>::setup_commitment_key(circuit_size + 1));
    let pk = Self::with_commitment_key(circuit_size, num_public_inputs, commitment_key)?;
    info!(elapsed_ms = %pk_t.elapsed().as_millis(), circuit_size, "proving_key_new");
    Ok(pk)
  }

  /// As [`ProvingKey::new`], sharing an existing commitment key.
  pub fn with_commitment_key(
    circuit_size: usize,
    num_public_inputs: usize,
    commitment_key: Arc<CommitmentKey<F>>,
  ) -> Result<Self, FlavorError> {
    let log_circuit_size = circuit_size.exact_log_2()?;

    let ck_length = PCS::<F>::commitment_key_length(&commitment_key);
    if ck_length < circuit_size + 1 {
      return Err(FlavorError::InvalidVectorSize {
        actual: circuit_size + 1,
        max: ck_length,
      });
    }

    let evaluation_domain = if is_grumpkin_flavor::<F>() {
      EvaluationDomain::new_without_roots(circuit_size)?
    } else {
      EvaluationDomain::new(circuit_size)?
    };
    debug!(
      circuit_size,
      log_circuit_size,
      has_roots = evaluation_domain.root.is_some(),
      "evaluation domain"
    );

    Ok(ProvingKey {
      circuit_size,
      log_circuit_size,
      num_public_inputs,
      pub_inputs_offset: 0,
      contains_recursive_proof: false,
      recursive_proof_public_input_indices: [0; RECURSIVE_PROOF_PUBLIC_INPUT_SIZE],
      evaluation_domain,
      commitment_key,
      public_inputs: Vec::new(),
    })
  }

  /// Sets the public input values. Their number must match `num_public_inputs`.
  pub fn set_public_inputs(&mut self, public_inputs: Vec<FF<F>>) -> Result<(), FlavorError> {
    if public_inputs.len() != self.num_public_inputs {
      return Err(FlavorError::InvalidVectorSize {
        actual: public_inputs.len(),
        max: self.num_public_inputs,
      });
    }
    self.public_inputs = public_inputs;
    Ok(())
  }

  /// Records that the public inputs carry an aggregation object at `indices`
  pub fn set_recursive_proof(&mut self, indices: RecursiveProofPublicInputIndices) {
    self.contains_recursive_proof = true;
    self.recursive_proof_public_input_indices = indices;
  }
}

/// A proving key that also owns the precomputed and witness polynomials
#[derive(Clone, Debug)]
pub struct UnionProvingKey<F: Flavor> {
  /// Circuit metadata and commitment key
  pub key: ProvingKey<F>,
  /// Precomputed polynomials, each of `circuit_size` coefficients
  pub precomputed: F::PrecomputedEntities<Polynomial<FF<F>>>,
  /// Witness polynomials, each of `circuit_size` coefficients
  pub witness: F::WitnessEntities<Polynomial<FF<F>>>,
}

impl<F: Flavor> Deref for UnionProvingKey<F> {
  type Target = ProvingKey<F>;

  fn deref(&self) -> &ProvingKey<F> {
    &self.key
  }
}

impl<F: Flavor> UnionProvingKey<F> {
  /// Creates the key and allocates every polynomial to `circuit_size` zeroes
  pub fn new(circuit_size: usize, num_public_inputs: usize) -> Result<Self, FlavorError> {
    let key = ProvingKey::new(circuit_size, num_public_inputs)?;
    Ok(Self::from_proving_key(key))
  }

  /// Wraps `key`, allocating every polynomial to its circuit size
  pub fn from_proving_key(key: ProvingKey<F>) -> Self {
    let (_alloc_span, alloc_t) = start_span!("union_proving_key_allocate");
    let n = key.circuit_size;
    let precomputed: F::PrecomputedEntities<Polynomial<FF<F>>> =
      Entities::from_fn(|_| Polynomial::new(n));
    let witness: F::WitnessEntities<Polynomial<FF<F>>> = Entities::from_fn(|_| Polynomial::new(n));
    info!(
      elapsed_ms = %alloc_t.elapsed().as_millis(),
      polynomials = F::NUM_PRECOMPUTED_ENTITIES + F::NUM_WITNESS_ENTITIES,
      "union_proving_key_allocate"
    );
    UnionProvingKey {
      key,
      precomputed,
      witness,
    }
  }

  /// Mutable access to the metadata
  pub fn key_mut(&mut self) -> &mut ProvingKey<F> {
    &mut self.key
  }

  /// Labels of the precomputed then witness polynomials
  pub fn get_labels(&self) -> Vec<&'static str> {
    self
      .precomputed
      .get_labels()
      .iter()
      .chain(self.witness.get_labels())
      .copied()
      .collect()
  }

  /// The precomputed then witness polynomials; this is the unshifted order of `AllEntities`
  pub fn get_all(&self) -> Vec<&Polynomial<FF<F>>> {
    self
      .precomputed
      .get_all()
      .iter()
      .chain(self.witness.get_all())
      .collect()
  }

  /// The precomputed polynomials
  pub fn get_precomputed_polynomials(&self) -> &[Polynomial<FF<F>>] {
    self.precomputed.get_all()
  }

  /// The witness polynomials
  pub fn get_witness_polynomials(&self) -> &[Polynomial<FF<F>>] {
    self.witness.get_all()
  }

  /// The precomputed polynomials, mutably
  pub fn get_precomputed_polynomials_mut(&mut self) -> &mut [Polynomial<FF<F>>] {
    self.precomputed.get_all_mut()
  }

  /// The witness polynomials, mutably
  pub fn get_witness_polynomials_mut(&mut self) -> &mut [Polynomial<FF<F>>] {
    self.witness.get_all_mut()
  }
}
