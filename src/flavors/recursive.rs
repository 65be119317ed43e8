// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Recursive flavors: the verifier of a native flavor, written as a circuit.
//!
//! A recursive flavor is parameterised by the circuit builder its verifier is written
//! with. Capabilities are declared per builder, so an instantiation outside the listed
//! ones is classified but fails every predicate.
use crate::{
  flavors::{ECCVMFlavor, MegaFlavor, TranslatorFlavor, UltraFlavor},
  impl_capabilities,
  traits::{CircuitBuilder, RecursiveFlavor},
};
use core::marker::PhantomData;

macro_rules! define_builders {
  ($($(#[$meta:meta])* $builder:ident => $name:literal;)*) => {
    $(
      $(#[$meta])*
      #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
      pub struct $builder;

      impl CircuitBuilder for $builder {
        const NAME: &'static str = $name;
      }
    )*
  };
}

define_builders! {
  /// Builds Ultra circuits
  UltraCircuitBuilder => "UltraCircuitBuilder";
  /// Builds Mega circuits, with an op queue
  MegaCircuitBuilder => "MegaCircuitBuilder";
  /// Executes the verifier natively, without building a circuit
  CircuitSimulatorBN254 => "CircuitSimulatorBN254";
}

macro_rules! define_recursive_flavors {
  ($($(#[$meta:meta])* $flavor:ident => $native:ty;)*) => {
    $(
      $(#[$meta])*
      #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
      pub struct $flavor<B: CircuitBuilder> {
        _p: PhantomData<B>,
      }

      impl<B: CircuitBuilder> RecursiveFlavor for $flavor<B>
      where
        $flavor<B>: crate::capabilities::Classified,
      {
        type NativeFlavor = $native;
        type Builder = B;
      }
    )*
  };
}

define_recursive_flavors! {
  /// Verifies Ultra proofs
  UltraRecursiveFlavor => UltraFlavor;
  /// Verifies Mega proofs
  MegaRecursiveFlavor => MegaFlavor;
  /// Verifies Translator proofs
  TranslatorRecursiveFlavor => TranslatorFlavor;
  /// Verifies ECCVM proofs
  ECCVMRecursiveFlavor => ECCVMFlavor;
}

impl_capabilities!(UltraRecursiveFlavor<UltraCircuitBuilder> => Recursive, Folding);
impl_capabilities!(UltraRecursiveFlavor<MegaCircuitBuilder> => Recursive, Folding);
impl_capabilities!(UltraRecursiveFlavor<CircuitSimulatorBN254> => Recursive, Folding);

impl_capabilities!(MegaRecursiveFlavor<UltraCircuitBuilder> => Recursive, Goblin, Folding);
impl_capabilities!(MegaRecursiveFlavor<MegaCircuitBuilder> => Recursive, Goblin, Folding);
impl_capabilities!(MegaRecursiveFlavor<CircuitSimulatorBN254> => Recursive, Goblin, Folding);

impl_capabilities!(TranslatorRecursiveFlavor<UltraCircuitBuilder> => Recursive);
impl_capabilities!(TranslatorRecursiveFlavor<MegaCircuitBuilder> => Recursive);
impl_capabilities!(TranslatorRecursiveFlavor<CircuitSimulatorBN254> => Recursive);

impl_capabilities!(ECCVMRecursiveFlavor<UltraCircuitBuilder> => Recursive, EccvmRecursive);
impl_capabilities!(ECCVMRecursiveFlavor<MegaCircuitBuilder> =>);
impl_capabilities!(ECCVMRecursiveFlavor<CircuitSimulatorBN254> =>);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::capabilities::{is_honk_flavor, is_recursive_flavor};

  fn native_is_honk<R: RecursiveFlavor>() -> bool {
    is_honk_flavor::<R::NativeFlavor>()
  }

  #[test]
  fn test_native_flavors() {
    assert!(native_is_honk::<UltraRecursiveFlavor<CircuitSimulatorBN254>>());
    assert!(native_is_honk::<MegaRecursiveFlavor<UltraCircuitBuilder>>());
    assert!(!native_is_honk::<TranslatorRecursiveFlavor<UltraCircuitBuilder>>());
    assert!(!native_is_honk::<ECCVMRecursiveFlavor<UltraCircuitBuilder>>());
    assert_eq!(
      <<MegaRecursiveFlavor<MegaCircuitBuilder> as RecursiveFlavor>::Builder as CircuitBuilder>::NAME,
      "MegaCircuitBuilder"
    );
  }

  #[test]
  fn test_unlisted_eccvm_builders() {
    assert!(!is_recursive_flavor::<ECCVMRecursiveFlavor<MegaCircuitBuilder>>());
    assert!(!is_recursive_flavor::<ECCVMRecursiveFlavor<CircuitSimulatorBN254>>());
  }
}
