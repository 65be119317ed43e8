// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Conversion of native values into sequences of field elements of a target field.
//!
//! This is the canonical representation a verification key is serialized and hashed
//! in, and what a recursive verifier reads back. Integers and booleans take one
//! element. A BN254 base-field element does not fit in the BN254 scalar field and is
//! split into a 136-bit low limb and a 118-bit high limb. A BN254 scalar-field element
//! embeds directly into the (larger) base field, which is how Grumpkin points are
//! represented over Grumpkin's scalar field.
use crate::errors::FlavorError;
use ff::PrimeField;
use halo2curves::bn256::{Fq, Fr};

/// Bits in the low limb of a split base-field element
pub const NUM_LIMB_BITS_LO: usize = 136;

/// Bits in the high limb of a split base-field element
pub const NUM_LIMB_BITS_HI: usize = 254 - NUM_LIMB_BITS_LO;

/// Values with a canonical representation as field elements of `F`.
pub trait FieldConvertible<F: PrimeField>: Sized {
  /// Number of elements of `F` one value occupies
  const NUM_FIELDS: usize;

  /// Returns the representation of `self`, exactly [`FieldConvertible::NUM_FIELDS`] elements
  fn to_field_elements(&self) -> Vec<F>;

  /// Reads a value back from exactly [`FieldConvertible::NUM_FIELDS`] elements
  fn from_field_elements(elements: &[F]) -> Result<Self, FlavorError>;
}

/// Returns the 32-byte big-endian encoding of a field element
pub fn field_to_be_bytes<F: PrimeField>(f: &F) -> [u8; 32] {
  let repr = f.to_repr();
  let mut bytes = [0u8; 32];
  for (b, r) in bytes.iter_mut().rev().zip(repr.as_ref()) {
    *b = *r;
  }
  bytes
}

/// Interprets little-endian bytes as an integer reduced modulo the field order
pub fn from_le_bytes_reduced<F: PrimeField>(bytes: &[u8]) -> F {
  let radix = F::from(256);
  bytes
    .iter()
    .rev()
    .fold(F::ZERO, |acc, b| acc * radix + F::from(u64::from(*b)))
}

/// Serializes `elements` as a u32 big-endian count followed by each element's 32-byte
/// big-endian encoding
pub fn to_buffer<F: PrimeField>(elements: &[F]) -> Vec<u8> {
  let mut buf = Vec::with_capacity(4 + 32 * elements.len());
  buf.extend_from_slice(&(elements.len() as u32).to_be_bytes());
  for e in elements {
    buf.extend_from_slice(&field_to_be_bytes(e));
  }
  buf
}

fn expect_len<F>(elements: &[F], expected: usize) -> Result<(), FlavorError> {
  if elements.len() != expected {
    return Err(FlavorError::InvalidFieldElements {
      reason: format!("expected {expected} field elements, got {}", elements.len()),
    });
  }
  Ok(())
}

fn fits_in_bits<F: PrimeField>(f: &F, bits: usize) -> bool {
  let le: Vec<u8> = field_to_be_bytes(f).into_iter().rev().collect();
  le.iter().enumerate().all(|(i, byte)| {
    let low_bit = i * 8;
    if low_bit >= bits {
      *byte == 0
    } else if low_bit + 8 > bits {
      *byte >> (bits - low_bit) == 0
    } else {
      true
    }
  })
}

fn to_u64<F: PrimeField>(f: &F) -> Result<u64, FlavorError> {
  let bytes = field_to_be_bytes(f);
  let (high, low) = bytes.split_at(24);
  if high.iter().any(|b| *b != 0) {
    return Err(FlavorError::InvalidFieldElements {
      reason: "element does not fit in 64 bits".to_string(),
    });
  }
  let mut word = [0u8; 8];
  word.copy_from_slice(low);
  Ok(u64::from_be_bytes(word))
}

macro_rules! impl_integer_conversion {
  ($($t:ty),*) => {
    $(
      impl<F: PrimeField> FieldConvertible<F> for $t {
        const NUM_FIELDS: usize = 1;

        fn to_field_elements(&self) -> Vec<F> {
          vec![F::from(*self as u64)]
        }

        fn from_field_elements(elements: &[F]) -> Result<Self, FlavorError> {
          expect_len(elements, 1)?;
          let value = to_u64(&elements[0])?;
          <$t>::try_from(value).map_err(|_| FlavorError::InvalidFieldElements {
            reason: format!("{value} does not fit in {}", stringify!($t)),
          })
        }
      }
    )*
  };
}

impl_integer_conversion!(u32, u64, usize);

impl<F: PrimeField> FieldConvertible<F> for bool {
  const NUM_FIELDS: usize = 1;

  fn to_field_elements(&self) -> Vec<F> {
    vec![F::from(u64::from(*self))]
  }

  fn from_field_elements(elements: &[F]) -> Result<Self, FlavorError> {
    expect_len(elements, 1)?;
    match to_u64(&elements[0])? {
      0 => Ok(false),
      1 => Ok(true),
      v => Err(FlavorError::InvalidFieldElements {
        reason: format!("{v} is not a boolean"),
      }),
    }
  }
}

impl<F: PrimeField, T: FieldConvertible<F>, const N: usize> FieldConvertible<F> for [T; N] {
  const NUM_FIELDS: usize = N * T::NUM_FIELDS;

  fn to_field_elements(&self) -> Vec<F> {
    self.iter().flat_map(|t| t.to_field_elements()).collect()
  }

  fn from_field_elements(elements: &[F]) -> Result<Self, FlavorError> {
    expect_len(elements, Self::NUM_FIELDS)?;
    let values = elements
      .chunks(T::NUM_FIELDS.max(1))
      .map(T::from_field_elements)
      .collect::<Result<Vec<T>, _>>()?;
    values
      .try_into()
      .map_err(|_| FlavorError::InvalidFieldElements {
        reason: format!("expected {N} array entries"),
      })
  }
}

macro_rules! impl_native_conversion {
  ($($f:ty),*) => {
    $(
      impl FieldConvertible<$f> for $f {
        const NUM_FIELDS: usize = 1;

        fn to_field_elements(&self) -> Vec<$f> {
          vec![*self]
        }

        fn from_field_elements(elements: &[$f]) -> Result<Self, FlavorError> {
          expect_len(elements, 1)?;
          Ok(elements[0])
        }
      }
    )*
  };
}

impl_native_conversion!(Fr, Fq);

fn from_le_bytes_canonical<F: PrimeField>(le: &[u8]) -> Result<F, FlavorError> {
  let mut repr = F::Repr::default();
  let out = repr.as_mut();
  if le.len() > out.len() {
    return Err(FlavorError::InvalidFieldElements {
      reason: "encoding is wider than the field".to_string(),
    });
  }
  out[..le.len()].copy_from_slice(le);
  Option::from(F::from_repr(repr)).ok_or(FlavorError::InvalidFieldElements {
    reason: "value is not a canonical field element".to_string(),
  })
}

fn to_le_bytes<F: PrimeField>(f: &F) -> Vec<u8> {
  field_to_be_bytes(f).into_iter().rev().collect()
}

// BN254 base field over the BN254 scalar field: two limbs, low first.
impl FieldConvertible<Fr> for Fq {
  const NUM_FIELDS: usize = 2;

  fn to_field_elements(&self) -> Vec<Fr> {
    let le = to_le_bytes(self);
    let split = NUM_LIMB_BITS_LO / 8;
    vec![
      from_le_bytes_reduced(&le[..split]),
      from_le_bytes_reduced(&le[split..]),
    ]
  }

  fn from_field_elements(elements: &[Fr]) -> Result<Self, FlavorError> {
    expect_len(elements, 2)?;
    let (lo, hi) = (&elements[0], &elements[1]);
    if !fits_in_bits(lo, NUM_LIMB_BITS_LO) || !fits_in_bits(hi, NUM_LIMB_BITS_HI) {
      return Err(FlavorError::InvalidFieldElements {
        reason: "limb exceeds its bit width".to_string(),
      });
    }
    let split = NUM_LIMB_BITS_LO / 8;
    let mut le = to_le_bytes(lo)[..split].to_vec();
    le.extend_from_slice(&to_le_bytes(hi)[..32 - split]);
    from_le_bytes_canonical(&le)
  }
}

// BN254 scalar field into the BN254 base field (Grumpkin's scalar field).
impl FieldConvertible<Fq> for Fr {
  const NUM_FIELDS: usize = 1;

  fn to_field_elements(&self) -> Vec<Fq> {
    vec![from_le_bytes_reduced(&to_le_bytes(self))]
  }

  fn from_field_elements(elements: &[Fq]) -> Result<Self, FlavorError> {
    expect_len(elements, 1)?;
    from_le_bytes_canonical(&to_le_bytes(&elements[0]))
  }
}
