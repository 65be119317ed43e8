// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! This module defines the interface of the polynomial commitment scheme a flavor
//! commits with. Only key setup and commitment are needed to derive keys.
use crate::{errors::FlavorError, field_conversion::FieldConvertible, traits::Engine};
use core::fmt::Debug;
use serde::{Deserialize, Serialize};

/// This trait defines the behavior of the commitment
pub trait CommitmentTrait<E: Engine>:
  Clone
  + Copy
  + Debug
  + Default
  + PartialEq
  + Eq
  + Send
  + Sync
  + FieldConvertible<E::Scalar>
  + Serialize
  + for<'de> Deserialize<'de>
{
}

/// A trait that ties different pieces of the commitment generation together
pub trait PCSEngineTrait<E: Engine>: Clone + Send + Sync + 'static {
  /// Holds the type of the commitment key
  /// The key should quantify its length in terms of group generators.
  type CommitmentKey: Clone + Debug + Send + Sync + Serialize + for<'de> Deserialize<'de>;

  /// A type that holds the verifier key
  type VerifierKey: Clone + Debug + PartialEq + Send + Sync + Serialize + for<'de> Deserialize<'de>;

  /// Holds the type of the commitment
  type Commitment: CommitmentTrait<E>;

  /// Produces a commitment key able to commit to vectors of up to `n` elements
  fn setup_commitment_key(n: usize) -> Self::CommitmentKey;

  /// Produces the verifier key matching a commitment key of capacity `n`
  fn setup_verifier_key(n: usize) -> Self::VerifierKey;

  /// Returns the number of elements the commitment key can commit to
  fn commitment_key_length(ck: &Self::CommitmentKey) -> usize;

  /// Commits to the provided vector using the provided ck and returns the commitment
  fn commit(ck: &Self::CommitmentKey, v: &[E::Scalar]) -> Result<Self::Commitment, FlavorError>;
}
