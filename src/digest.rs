// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Cryptographic digests of field-element sequences.
//!
//! The `Digestible` trait writes a byte representation of a value into any
//! `io::Write` sink, and `DigestComputer` feeds it to a hash function (SHA-256 for
//! verification keys). `FieldElementsBuffer` is the byte layout a verification key is
//! hashed in, selected with `VkHashLayout`.
use crate::{errors::FlavorError, field_conversion::to_buffer};
use digest::{Digest, Output};
use ff::PrimeField;
use serde::{Deserialize, Serialize};
use std::{io, marker::PhantomData};

/// Trait for values that can be written to a hasher as bytes.
pub trait Digestible {
  /// Write the byte representation of Self in a byte buffer
  fn write_bytes<W: Sized + io::Write>(&self, byte_sink: &mut W) -> Result<(), io::Error>;
}

/// Byte layout of the buffer a verification key is hashed over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VkHashLayout {
  /// `32 * n` zero bytes, then the u32 big-endian element count, then every element as
  /// 32 big-endian bytes. This is the layout deployed verifiers hash.
  #[default]
  ZeroPrefixed,
  /// The element count and the elements, without the zero prefix
  Compact,
}

/// A sequence of field elements laid out for hashing.
pub struct FieldElementsBuffer<'a, F: PrimeField> {
  elements: &'a [F],
  layout: VkHashLayout,
}

impl<'a, F: PrimeField> FieldElementsBuffer<'a, F> {
  /// Wraps `elements` with the given layout
  pub fn new(elements: &'a [F], layout: VkHashLayout) -> Self {
    FieldElementsBuffer { elements, layout }
  }
}

impl<F: PrimeField> Digestible for FieldElementsBuffer<'_, F> {
  fn write_bytes<W: Sized + io::Write>(&self, byte_sink: &mut W) -> Result<(), io::Error> {
    if self.layout == VkHashLayout::ZeroPrefixed {
      byte_sink.write_all(&vec![0u8; 32 * self.elements.len()])?;
    }
    byte_sink.write_all(&to_buffer(self.elements))
  }
}

/// A utility for computing cryptographic digests of `Digestible` instances with the
/// hash function `D`.
pub struct DigestComputer<'a, T, D> {
  inner: &'a T,
  _p: PhantomData<D>,
}

impl<'a, T: Digestible, D: Digest + io::Write> DigestComputer<'a, T, D> {
  /// Create a new DigestComputer
  pub fn new(inner: &'a T) -> Self {
    DigestComputer {
      inner,
      _p: PhantomData,
    }
  }

  /// Compute the digest of a `Digestible` instance.
  pub fn digest(&self) -> Result<Output<D>, FlavorError> {
    let mut hasher = D::new();
    self
      .inner
      .write_bytes(&mut hasher)
      .map_err(|e| FlavorError::DigestError {
        reason: e.to_string(),
      })?;
    Ok(hasher.finalize())
  }
}
