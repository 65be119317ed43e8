// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

use crate::errors::FlavorError;

pub trait Math {
  /// Index of the most significant set bit, i.e. `floor(log2(self))`.
  fn get_msb(self) -> usize;

  /// `log2(self)` for a power of two, rejecting every other value.
  fn exact_log_2(self) -> Result<usize, FlavorError>;
}

impl Math for usize {
  fn get_msb(self) -> usize {
    assert_ne!(self, 0);
    (usize::BITS - 1 - self.leading_zeros()) as usize
  }

  fn exact_log_2(self) -> Result<usize, FlavorError> {
    if self == 0 || !self.is_power_of_two() {
      return Err(FlavorError::InvalidCircuitSize { size: self });
    }
    Ok(self.get_msb())
  }
}

#[cfg(test)]
mod tests {
  use super::Math;
  use crate::errors::FlavorError;

  #[test]
  fn test_msb() {
    assert_eq!(1usize.get_msb(), 0);
    assert_eq!(2usize.get_msb(), 1);
    assert_eq!(3usize.get_msb(), 1);
    assert_eq!(1024usize.get_msb(), 10);
    assert_eq!(1025usize.get_msb(), 10);
  }

  #[test]
  fn test_exact_log_2() {
    assert_eq!(1024usize.exact_log_2(), Ok(10));
    assert_eq!(1usize.exact_log_2(), Ok(0));
    assert_eq!(
      0usize.exact_log_2(),
      Err(FlavorError::InvalidCircuitSize { size: 0 })
    );
    assert_eq!(
      12usize.exact_log_2(),
      Err(FlavorError::InvalidCircuitSize { size: 12 })
    );
  }
}
