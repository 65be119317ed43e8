// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Verification keys.
//!
//! A verification key carries the circuit metadata and one commitment per precomputed
//! polynomial. Its canonical form is a sequence of scalar-field elements, which is what
//! a recursive verifier reads and what the key's SHA-256 hash is computed over.
use crate::{
  Commitment, FF, PCS, PrecomputedCommitments, VerifierCommitmentKey,
  digest::{DigestComputer, FieldElementsBuffer, VkHashLayout},
  entities::Entities,
  errors::FlavorError,
  field_conversion::FieldConvertible,
  math::Math,
  polys::polynomial::Polynomial,
  proving_key::{
    ProvingKey, RECURSIVE_PROOF_PUBLIC_INPUT_SIZE, RecursiveProofPublicInputIndices,
    UnionProvingKey,
  },
  start_span,
  traits::{Flavor, pcs::PCSEngineTrait},
};
use itertools::Itertools;
use num_bigint::BigUint;
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Instant};
use tracing::{debug, info, info_span};

/// Number of field elements preceding the commitments in the canonical form
const NUM_METADATA_FIELDS: usize = 4 + RECURSIVE_PROOF_PUBLIC_INPUT_SIZE;

/// The verification key of a circuit of flavor `F`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
  bound(
    serialize = "PrecomputedCommitments<F>: Serialize",
    deserialize = "PrecomputedCommitments<F>: Deserialize<'de>"
  ),
  try_from = "SerializedVerificationKey<F>"
)]
pub struct VerificationKey<F: Flavor> {
  circuit_size: usize,
  #[serde(skip_serializing)]
  log_circuit_size: usize,
  num_public_inputs: usize,
  pub_inputs_offset: usize,
  contains_recursive_proof: bool,
  recursive_proof_public_input_indices: RecursiveProofPublicInputIndices,
  #[serde(skip)]
  pcs_verification_key: Option<Arc<VerifierCommitmentKey<F>>>,
  commitments: PrecomputedCommitments<F>,
  #[serde(skip, default = "OnceCell::new")]
  digest: OnceCell<BigUint>,
}

/// The serialized fields of a verification key, checked before they become a key
#[derive(Deserialize)]
#[serde(bound(deserialize = "PrecomputedCommitments<F>: Deserialize<'de>"))]
struct SerializedVerificationKey<F: Flavor> {
  circuit_size: usize,
  num_public_inputs: usize,
  pub_inputs_offset: usize,
  contains_recursive_proof: bool,
  recursive_proof_public_input_indices: RecursiveProofPublicInputIndices,
  commitments: PrecomputedCommitments<F>,
}

impl<F: Flavor> TryFrom<SerializedVerificationKey<F>> for VerificationKey<F> {
  type Error = FlavorError;

  fn try_from(vk: SerializedVerificationKey<F>) -> Result<Self, FlavorError> {
    let log_circuit_size = vk.circuit_size.exact_log_2()?;
    Ok(VerificationKey {
      circuit_size: vk.circuit_size,
      log_circuit_size,
      num_public_inputs: vk.num_public_inputs,
      pub_inputs_offset: vk.pub_inputs_offset,
      contains_recursive_proof: vk.contains_recursive_proof,
      recursive_proof_public_input_indices: vk.recursive_proof_public_input_indices,
      pcs_verification_key: None,
      commitments: vk.commitments,
      digest: OnceCell::new(),
    })
  }
}

impl<F: Flavor> VerificationKey<F> {
  /// Creates a key with the given metadata and identity commitments
  pub fn new(circuit_size: usize, num_public_inputs: usize) -> Result<Self, FlavorError> {
    let log_circuit_size = circuit_size.exact_log_2()?;
    Ok(VerificationKey {
      circuit_size,
      log_circuit_size,
      num_public_inputs,
      pub_inputs_offset: 0,
      contains_recursive_proof: false,
      recursive_proof_public_input_indices: [0; RECURSIVE_PROOF_PUBLIC_INPUT_SIZE],
      pcs_verification_key: None,
      commitments: Entities::from_fn(|_| <Commitment<F>>::default()),
      digest: OnceCell::new(),
    })
  }

  /// Derives the key of `pk` by committing to each of `precomputed` with the proving
  /// key's commitment key
  pub fn from_proving_key(
    pk: &ProvingKey<F>,
    precomputed: &F::PrecomputedEntities<Polynomial<FF<F>>>,
  ) -> Result<Self, FlavorError> {
    let (_vk_span, vk_t) = start_span!(
      "verification_key_from_proving_key",
      circuit_size = pk.circuit_size,
      polynomials = F::NUM_PRECOMPUTED_ENTITIES
    );

    let commitments = precomputed
      .get_all()
      .par_iter()
      .map(|poly| PCS::<F>::commit(&pk.commitment_key, poly.coeffs()))
      .collect::<Result<Vec<_>, _>>()?;
    for (label, comm) in precomputed.get_labels().iter().zip_eq(commitments.iter()) {
      debug!(label, commitment = ?comm, "precomputed commitment");
    }
    let commitments = <PrecomputedCommitments<F> as Entities>::try_from_vec(commitments)?;

    let ck_length = PCS::<F>::commitment_key_length(&pk.commitment_key);
    let vk = VerificationKey {
      circuit_size: pk.circuit_size,
      log_circuit_size: pk.log_circuit_size,
      num_public_inputs: pk.num_public_inputs,
      pub_inputs_offset: pk.pub_inputs_offset,
      contains_recursive_proof: pk.contains_recursive_proof,
      recursive_proof_public_input_indices: pk.recursive_proof_public_input_indices,
      pcs_verification_key: Some(Arc::new(PCS::<F>::setup_verifier_key(ck_length))),
      commitments,
      digest: OnceCell::new(),
    };
    info!(
      elapsed_ms = %vk_t.elapsed().as_millis(),
      "verification_key_from_proving_key"
    );
    Ok(vk)
  }

  /// Derives the key of a proving key that owns its polynomials
  pub fn from_union_proving_key(pk: &UnionProvingKey<F>) -> Result<Self, FlavorError> {
    Self::from_proving_key(&pk.key, &pk.precomputed)
  }

  /// Number of rows of the execution trace
  pub fn circuit_size(&self) -> usize {
    self.circuit_size
  }

  /// `log2(circuit_size)`
  pub fn log_circuit_size(&self) -> usize {
    self.log_circuit_size
  }

  /// Number of public inputs
  pub fn num_public_inputs(&self) -> usize {
    self.num_public_inputs
  }

  /// Offset of the public inputs from the start of the execution trace
  pub fn pub_inputs_offset(&self) -> usize {
    self.pub_inputs_offset
  }

  /// Whether the public inputs carry a recursive-proof aggregation object
  pub fn contains_recursive_proof(&self) -> bool {
    self.contains_recursive_proof
  }

  /// Where the aggregation object sits among the public inputs
  pub fn recursive_proof_public_input_indices(&self) -> &RecursiveProofPublicInputIndices {
    &self.recursive_proof_public_input_indices
  }

  /// The verifier side of the commitment scheme, if set
  pub fn pcs_verification_key(&self) -> Option<&Arc<VerifierCommitmentKey<F>>> {
    self.pcs_verification_key.as_ref()
  }

  /// The commitments to the precomputed polynomials
  pub fn commitments(&self) -> &PrecomputedCommitments<F> {
    &self.commitments
  }

  /// Mutable access to the commitments; the cached hash is dropped
  pub fn commitments_mut(&mut self) -> &mut PrecomputedCommitments<F> {
    self.digest = OnceCell::new();
    &mut self.commitments
  }

  /// Sets the public-input offset
  pub fn set_pub_inputs_offset(&mut self, offset: usize) {
    self.digest = OnceCell::new();
    self.pub_inputs_offset = offset;
  }

  /// Records that the public inputs carry an aggregation object at `indices`
  pub fn set_recursive_proof(&mut self, indices: RecursiveProofPublicInputIndices) {
    self.digest = OnceCell::new();
    self.contains_recursive_proof = true;
    self.recursive_proof_public_input_indices = indices;
  }

  /// Clears the recursive-proof flag and its indices
  pub fn clear_recursive_proof(&mut self) {
    self.digest = OnceCell::new();
    self.contains_recursive_proof = false;
    self.recursive_proof_public_input_indices = [0; RECURSIVE_PROOF_PUBLIC_INPUT_SIZE];
  }

  /// Shares a verifier key. It is not part of the canonical form.
  pub fn set_pcs_verification_key(&mut self, key: Arc<VerifierCommitmentKey<F>>) {
    self.pcs_verification_key = Some(key);
  }

  /// Returns the canonical form: circuit size, public-input count, public-input
  /// offset, recursive-proof flag, the recursive-proof indices, then every commitment
  /// in layout order.
  pub fn to_field_elements(&self) -> Vec<FF<F>> {
    let mut elements = Vec::with_capacity(Self::num_field_elements());
    elements.extend(FieldConvertible::<FF<F>>::to_field_elements(&self.circuit_size));
    elements.extend(FieldConvertible::<FF<F>>::to_field_elements(&self.num_public_inputs));
    elements.extend(FieldConvertible::<FF<F>>::to_field_elements(&self.pub_inputs_offset));
    elements.extend(FieldConvertible::<FF<F>>::to_field_elements(
      &self.contains_recursive_proof,
    ));
    elements.extend(FieldConvertible::<FF<F>>::to_field_elements(
      &self.recursive_proof_public_input_indices,
    ));
    for comm in self.commitments.get_all() {
      elements.extend(comm.to_field_elements());
    }
    elements
  }

  /// Reads a key back from its canonical form. The verifier key is left unset.
  pub fn from_field_elements(elements: &[FF<F>]) -> Result<Self, FlavorError> {
    if elements.len() != Self::num_field_elements() {
      return Err(FlavorError::InvalidFieldElements {
        reason: format!(
          "a verification key takes {} field elements, got {}",
          Self::num_field_elements(),
          elements.len()
        ),
      });
    }
    let (metadata, commitments) = elements.split_at(NUM_METADATA_FIELDS);

    let circuit_size = usize::from_field_elements(&metadata[0..1])?;
    let log_circuit_size =
      circuit_size
        .exact_log_2()
        .map_err(|_| FlavorError::InvalidFieldElements {
          reason: format!("circuit size {circuit_size} is not a power of two"),
        })?;
    let num_public_inputs = usize::from_field_elements(&metadata[1..2])?;
    let pub_inputs_offset = usize::from_field_elements(&metadata[2..3])?;
    let contains_recursive_proof = bool::from_field_elements(&metadata[3..4])?;
    let recursive_proof_public_input_indices =
      <RecursiveProofPublicInputIndices as FieldConvertible<FF<F>>>::from_field_elements(
        &metadata[4..],
      )?;

    let commitments = commitments
      .chunks_exact(<Commitment<F> as FieldConvertible<FF<F>>>::NUM_FIELDS)
      .map(<Commitment<F> as FieldConvertible<FF<F>>>::from_field_elements)
      .collect::<Result<Vec<_>, _>>()?;

    Ok(VerificationKey {
      circuit_size,
      log_circuit_size,
      num_public_inputs,
      pub_inputs_offset,
      contains_recursive_proof,
      recursive_proof_public_input_indices,
      pcs_verification_key: None,
      commitments: <PrecomputedCommitments<F> as Entities>::try_from_vec(commitments)?,
      digest: OnceCell::new(),
    })
  }

  /// Number of field elements in the canonical form
  pub fn num_field_elements() -> usize {
    NUM_METADATA_FIELDS
      + F::NUM_PRECOMPUTED_ENTITIES * <Commitment<F> as FieldConvertible<FF<F>>>::NUM_FIELDS
  }

  /// SHA-256 of the zero-prefixed buffer of the canonical form, as a big-endian
  /// integer. Cached until the key is next mutated.
  pub fn hash(&self) -> Result<BigUint, FlavorError> {
    self
      .digest
      .get_or_try_init(|| self.compute_hash(VkHashLayout::default()))
      .cloned()
  }

  /// As [`VerificationKey::hash`], over the buffer laid out as `layout`
  pub fn hash_with_layout(&self, layout: VkHashLayout) -> Result<BigUint, FlavorError> {
    if layout == VkHashLayout::default() {
      return self.hash();
    }
    self.compute_hash(layout)
  }

  fn compute_hash(&self, layout: VkHashLayout) -> Result<BigUint, FlavorError> {
    let (_hash_span, hash_t) = start_span!("verification_key_hash", ?layout);
    let elements = self.to_field_elements();
    let buffer = FieldElementsBuffer::new(&elements, layout);
    let digest = DigestComputer::<_, Sha256>::new(&buffer).digest()?;
    info!(elapsed_ms = %hash_t.elapsed().as_millis(), "verification_key_hash");
    Ok(BigUint::from_bytes_be(&digest))
  }
}

impl<F: Flavor> PartialEq for VerificationKey<F> {
  fn eq(&self, other: &Self) -> bool {
    self.to_field_elements() == other.to_field_elements()
  }
}

impl<F: Flavor> Eq for VerificationKey<F> {}
