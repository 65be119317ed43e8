// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Relation descriptors.
//!
//! A relation is a set of subrelations (polynomial identities) checked over every row
//! of the execution trace. The flavor layer only needs their shape: for every
//! subrelation its *partial length* (degree + 1 in the witness and selector
//! polynomials) and its *total length* (degree + 1 counting the relation parameters as
//! well, which is what folding has to extend over). Descriptors are declared with
//! [`define_relation!`](crate::define_relation).
use crate::relation_shape::ShapedContainer;
use ff::PrimeField;

/// Returns the largest entry of `lengths`, or 0 when it is empty.
pub const fn max_length(lengths: &[usize]) -> usize {
  let mut max = 0;
  let mut i = 0;
  while i < lengths.len() {
    if lengths[i] > max {
      max = lengths[i];
    }
    i += 1;
  }
  max
}

/// Checks that partial and total lengths describe the same subrelations and that no
/// total length is smaller than its partial length. Panics otherwise, which turns a
/// malformed descriptor into a compile error when evaluated in a `const` item.
pub const fn check_subrelation_lengths(partial: &[usize], total: &[usize]) {
  assert!(
    partial.len() == total.len(),
    "partial and total lengths must list the same subrelations"
  );
  let mut i = 0;
  while i < partial.len() {
    assert!(
      total[i] >= partial[i],
      "a subrelation total length is smaller than its partial length"
    );
    i += 1;
  }
}

/// The descriptor of one relation
pub trait Relation: Send + Sync + 'static {
  /// Human readable name of the relation
  const NAME: &'static str;

  /// Partial length of every subrelation
  const SUBRELATION_PARTIAL_LENGTHS: &'static [usize];

  /// Total length of every subrelation
  const SUBRELATION_TOTAL_LENGTHS: &'static [usize];

  /// Number of subrelations
  const NUM_SUBRELATIONS: usize = Self::SUBRELATION_PARTIAL_LENGTHS.len();

  /// Maximum partial length over the subrelations
  const RELATION_LENGTH: usize = max_length(Self::SUBRELATION_PARTIAL_LENGTHS);

  /// Maximum total length over the subrelations
  const TOTAL_RELATION_LENGTH: usize = max_length(Self::SUBRELATION_TOTAL_LENGTHS);

  /// One `Univariate` per subrelation, sized by its partial length
  type SumcheckUnivariates<F: PrimeField>: ShapedContainer;

  /// One field value per subrelation
  type ArrayOfValues<F: PrimeField>: ShapedContainer;
}

/// Shapes of a relation's Protogalaxy accumulators when folding `NUM_INSTANCES` instances.
///
/// A subrelation of total length `L` combined over `NUM_INSTANCES` instances yields a
/// univariate of length `(L - 1) * (NUM_INSTANCES - 1) + 1`.
pub trait ProtogalaxyRelation<const NUM_INSTANCES: usize>: Relation {
  /// One `Univariate` per subrelation, over the folded domain
  type Univariates<F: PrimeField>: ShapedContainer;

  /// As [`ProtogalaxyRelation::Univariates`], with the evaluations at
  /// `1..NUM_INSTANCES` left uncomputed
  type OptimisedUnivariates<F: PrimeField>: ShapedContainer;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __univariate_list {
  ($field:ty; $skip:expr; ) => {
    ()
  };
  ($field:ty; $skip:expr; $len:expr $(, $rest:expr)*) => {
    (
      $crate::polys::univariate::Univariate<$field, { $len }, { $skip }>,
      $crate::__univariate_list!($field; $skip; $($rest),*),
    )
  };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __protogalaxy_relation {
  ($name:ident; $instances:literal; $($total:literal),+) => {
    impl $crate::traits::relation::ProtogalaxyRelation<$instances> for $name {
      type Univariates<F: $crate::ff::PrimeField> = $crate::__univariate_list!(
        F; 0; $(($total - 1) * ($instances - 1) + 1),+
      );
      type OptimisedUnivariates<F: $crate::ff::PrimeField> = $crate::__univariate_list!(
        F; $instances - 1; $(($total - 1) * ($instances - 1) + 1),+
      );
    }
  };
}

/// Declares a relation descriptor together with its accumulator shapes.
///
/// ```ignore
/// define_relation! {
///   /// Arithmetic gates
///   pub struct ArithmeticRelation {
///     name: "Arithmetic",
///     partial: [6, 5],
///     total: [6, 5],
///   }
/// }
/// ```
///
/// Protogalaxy shapes are generated for folding 2, 3 and 4 instances.
#[macro_export]
macro_rules! define_relation {
  (
    $(#[$meta:meta])*
    $vis:vis struct $name:ident {
      name: $label:literal,
      partial: [ $($partial:literal),+ $(,)? ],
      total: [ $($total:literal),+ $(,)? ] $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    $vis struct $name;

    impl $crate::traits::relation::Relation for $name {
      const NAME: &'static str = $label;
      const SUBRELATION_PARTIAL_LENGTHS: &'static [usize] = &[$($partial),+];
      const SUBRELATION_TOTAL_LENGTHS: &'static [usize] = &[$($total),+];

      type SumcheckUnivariates<F: $crate::ff::PrimeField> = $crate::__univariate_list!(F; 0; $($partial),+);
      type ArrayOfValues<F: $crate::ff::PrimeField> =
        $crate::relation_shape::ArrayOfValues<F, { $crate::__count!($($partial)+) }>;
    }

    const _: () = $crate::traits::relation::check_subrelation_lengths(
      <$name as $crate::traits::relation::Relation>::SUBRELATION_PARTIAL_LENGTHS,
      <$name as $crate::traits::relation::Relation>::SUBRELATION_TOTAL_LENGTHS,
    );

    $crate::__protogalaxy_relation!($name; 2; $($total),+);
    $crate::__protogalaxy_relation!($name; 3; $($total),+);
    $crate::__protogalaxy_relation!($name; 4; $($total),+);
  };
}
