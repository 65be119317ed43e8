// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! The shipped flavors.
pub mod avm;
pub mod eccvm;
pub mod legacy;
pub mod mega;
pub mod recursive;
pub mod translator;
pub mod ultra;

pub use self::{
  avm::AvmFlavor, eccvm::ECCVMFlavor, mega::MegaFlavor, translator::TranslatorFlavor,
  ultra::{UltraFlavor, UltraKeccakFlavor},
};

use crate::{FF, polys::polynomial::Polynomial, proving_key::UnionProvingKey};

macro_rules! impl_get_selectors {
  ($($flavor:ty),*) => {
    $(
      impl UnionProvingKey<$flavor> {
        /// The selector polynomials
        pub fn get_selectors(&self) -> &[Polynomial<FF<$flavor>>] {
          self.precomputed.get_selectors()
        }
      }
    )*
  };
}

impl_get_selectors!(AvmFlavor, MegaFlavor, UltraFlavor, UltraKeccakFlavor);
