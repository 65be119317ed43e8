// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Compile-time classification of flavor types.
//!
//! Every flavor tag type declares the set of [`Capability`]s it has through
//! [`impl_capabilities!`](crate::impl_capabilities). One invocation produces both
//! representations used by generic code:
//! - the `const` [`CapabilitySet`] behind [`Classified::CAPABILITIES`], queried with the
//!   `is_*` const predicates below (resolved at compile time, no runtime tags);
//! - one marker trait per capability (`IsHonkFlavor`, `IsFoldingFlavor`, ...), used as
//!   trait bounds so that invalid flavor choices are rejected by the compiler.
//!
//! A type that implements [`Classified`] without listing capabilities fails every predicate.

/// One membership class a flavor may belong to. The classes overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Capability {
  /// Legacy (Plonk) protocol family
  Plonk = 1 << 0,
  /// Legacy Ultra-style arithmetization
  UltraPlonk = 1 << 1,
  /// Ultra-style arithmetization, legacy or current
  UltraPlonkOrHonk = 1 << 2,
  /// Current (Honk) protocol family
  Honk = 1 << 3,
  /// Ultra-class Honk flavor
  Ultra = 1 << 4,
  /// Supports the op-queue mechanism for outsourced elliptic-curve work
  Goblin = 1 << 5,
  /// The flavor describes verifying a proof inside another circuit
  Recursive = 1 << 6,
  /// Recursive verification of an ECCVM proof
  EccvmRecursive = 1 << 7,
  /// Commits over Grumpkin, i.e. its scalar field is foreign to BN254's
  Grumpkin = 1 << 8,
  /// Usable as input or output of Protogalaxy folding
  Folding = 1 << 9,
}

/// A set of [`Capability`] values usable in `const` context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u16);

impl CapabilitySet {
  /// The empty set
  pub const EMPTY: Self = CapabilitySet(0);

  /// Returns a copy of the set with `capability` added
  pub const fn with(self, capability: Capability) -> Self {
    CapabilitySet(self.0 | capability as u16)
  }

  /// Whether `capability` belongs to the set
  pub const fn contains(self, capability: Capability) -> bool {
    self.0 & capability as u16 != 0
  }

  /// Whether the set is empty
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }
}

/// Implemented by every flavor tag type.
pub trait Classified {
  /// Capabilities of the flavor
  const CAPABILITIES: CapabilitySet = CapabilitySet::EMPTY;
}

/// Legacy Plonk flavors
pub trait IsPlonkFlavor: Classified {}
/// Legacy Ultra-style flavors
pub trait IsUltraPlonkFlavor: Classified {}
/// Ultra-style flavors of either family
pub trait IsUltraPlonkOrHonkFlavor: Classified {}
/// Honk flavors
pub trait IsHonkFlavor: Classified {}
/// Ultra-class Honk flavors
pub trait IsUltraFlavor: Classified {}
/// Flavors supporting the op queue
pub trait IsGoblinFlavor: Classified {}
/// Recursive-circuit instantiations
pub trait IsRecursiveFlavor: Classified {}
/// Recursive ECCVM instantiations
pub trait IsEccvmRecursiveFlavor: Classified {}
/// Flavors whose commitments live on Grumpkin
pub trait IsGrumpkinFlavor: Classified {}
/// Flavors accepted by Protogalaxy folding
pub trait IsFoldingFlavor: Classified {}

/// Declares the capabilities of a flavor type.
///
/// ```ignore
/// impl_capabilities!(UltraFlavor => UltraPlonkOrHonk, Honk, Ultra, Folding);
/// ```
#[macro_export]
macro_rules! impl_capabilities {
  ($ty:ty => $($capability:ident),* $(,)?) => {
    impl $crate::capabilities::Classified for $ty {
      const CAPABILITIES: $crate::capabilities::CapabilitySet =
        $crate::capabilities::CapabilitySet::EMPTY
          $(.with($crate::capabilities::Capability::$capability))*;
    }
    $(
      $crate::paste::paste! {
        impl $crate::capabilities::[<Is $capability Flavor>] for $ty {}
      }
    )*
  };
}

/// Whether `T` has `capability`
pub const fn has_capability<T: Classified>(capability: Capability) -> bool {
  T::CAPABILITIES.contains(capability)
}

macro_rules! define_predicates {
  ($($(#[$meta:meta])* $name:ident => $capability:ident;)*) => {
    $(
      $(#[$meta])*
      pub const fn $name<T: Classified>() -> bool {
        has_capability::<T>(Capability::$capability)
      }
    )*
  };
}

define_predicates! {
  /// Legacy protocol family
  is_plonk_flavor => Plonk;
  /// Legacy Ultra-style
  is_ultra_plonk_flavor => UltraPlonk;
  /// Ultra-style, legacy or current
  is_ultra_plonk_or_honk => UltraPlonkOrHonk;
  /// Current protocol family
  is_honk_flavor => Honk;
  /// Ultra-class current flavor
  is_ultra_flavor => Ultra;
  /// Supports the op queue
  is_goblin_flavor => Goblin;
  /// Recursive-circuit instantiation
  is_recursive_flavor => Recursive;
  /// Recursive ECCVM instantiation
  is_eccvm_recursive_flavor => EccvmRecursive;
  /// Foreign-field (Grumpkin) flavor
  is_grumpkin_flavor => Grumpkin;
  /// Folding-capable
  is_folding_flavor => Folding;
}
