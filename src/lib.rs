// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! This library implements the flavor layer of Honk-style proof systems.
//! A flavor fixes the curve, the commitment scheme, the constraint relations and the
//! layout of every polynomial of a circuit. From it the library derives proving keys,
//! verification keys (with their canonical field-element form and hash), and the
//! shapes of the sumcheck and Protogalaxy accumulators.
#![deny(
  warnings,
  unused,
  future_incompatible,
  nonstandard_style,
  rust_2018_idioms,
  missing_docs
)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::type_complexity)]
#![forbid(unsafe_code)]

// private modules
mod math;

// public modules
pub mod capabilities;
pub mod digest;
pub mod entities;
pub mod errors;
pub mod field_conversion;
pub mod flavors;
pub mod polys;
pub mod proving_key;
pub mod provider;
pub mod relation_shape;
pub mod relations;
pub mod traits;
pub mod verification_key;

#[doc(hidden)]
pub use paste;

pub use ff;
pub use serde;

/// Start a span + timer, return `(Span, Instant)`.
macro_rules! start_span {
    ($name:expr $(, $($fmt:tt)+)?) => {{
        let span       = info_span!($name $(, $($fmt)+)?);
        let span_clone = span.clone();    // lives as long as the guard
        let _guard      = span_clone.enter();
        (span, Instant::now())
    }};
}
pub(crate) use start_span;

use traits::{Engine, Flavor, pcs::PCSEngineTrait};

/// The scalar field of a flavor
pub type FF<F> = <<F as Flavor>::E as Engine>::Scalar;
/// The commitment scheme of a flavor
pub type PCS<F> = <<F as Flavor>::E as Engine>::PCS;
/// The commitment key of a flavor
pub type CommitmentKey<F> = <PCS<F> as PCSEngineTrait<<F as Flavor>::E>>::CommitmentKey;
/// The verifier key of a flavor's commitment scheme
pub type VerifierCommitmentKey<F> = <PCS<F> as PCSEngineTrait<<F as Flavor>::E>>::VerifierKey;
/// A commitment of a flavor
pub type Commitment<F> = <PCS<F> as PCSEngineTrait<<F as Flavor>::E>>::Commitment;

/// Every polynomial of a circuit, shifts included
pub type ProverPolynomials<F> = <F as Flavor>::AllEntities<polys::polynomial::Polynomial<FF<F>>>;
/// Evaluations of every entity at one point
pub type AllValues<F> = <F as Flavor>::AllEntities<FF<F>>;
/// The commitments a verifier reads, one slot per entity
pub type VerifierCommitments<F> = <F as Flavor>::AllEntities<Commitment<F>>;
/// Commitments to the precomputed polynomials
pub type PrecomputedCommitments<F> = <F as Flavor>::PrecomputedEntities<Commitment<F>>;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    entities::{Entities, ShiftableEntities, flavor_get_label, get_unshifted_then_shifted},
    flavors::UltraFlavor,
    polys::polynomial::Polynomial,
  };
  use ff::Field;

  #[test]
  fn test_prover_polynomials_views() {
    let mut polys = <ProverPolynomials<UltraFlavor> as Entities>::from_fn(|_| Polynomial::new(4));
    polys.w_l_mut().coeffs_mut()[0] = FF::<UltraFlavor>::ONE;
    assert_eq!(polys.get_wires()[0].coeffs()[0], FF::<UltraFlavor>::ONE);
    assert_eq!(flavor_get_label(&polys, polys.w_o()), "w_o");
    assert_eq!(
      get_unshifted_then_shifted(&polys).len(),
      polys.get_unshifted().len() + ShiftableEntities::get_shifted(&polys).len()
    );

    let values = AllValues::<UltraFlavor>::default();
    assert!(values.get_all().iter().all(|v| bool::from(v.is_zero())));
    let commitments = VerifierCommitments::<UltraFlavor>::default();
    assert_eq!(commitments.get_all().len(), UltraFlavor::NUM_ALL_ENTITIES);
  }
}
