// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! This module defines errors returned by the library.
use core::fmt::Debug;
use thiserror::Error;

/// Errors returned by honk-flavor
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FlavorError {
  /// returned if a circuit size is zero or not a power of two
  #[error("InvalidCircuitSize: {size}")]
  InvalidCircuitSize {
    /// The rejected circuit size
    size: usize,
  },
  /// returned when input vector size exceeds commitment key capacity
  #[error("InvalidVectorSize")]
  InvalidVectorSize {
    /// The actual size of the input vector
    actual: usize,
    /// The maximum size that can be handled
    max: usize,
  },
  /// returned if an entity collection is built from the wrong number of values
  #[error("InvalidEntityCount: expected {expected}, got {actual}")]
  InvalidEntityCount {
    /// The number of entities of the collection
    expected: usize,
    /// The number of values supplied
    actual: usize,
  },
  /// returned if a sequence of field elements cannot be decoded
  #[error("InvalidFieldElements: {reason}")]
  InvalidFieldElements {
    /// The reason for the decoding failure
    reason: String,
  },
  /// returned when there is an error creating a digest
  #[error("DigestError")]
  DigestError {
    /// The reason for the digest error
    reason: String,
  },
  /// returned when an arithmetic invariant unexpectedly fails
  #[error("InternalError: {reason}")]
  InternalError {
    /// The reason for the internal error
    reason: String,
  },
}
