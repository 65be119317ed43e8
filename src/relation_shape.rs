// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Container shapes derived from a flavor's relation list.
//!
//! Relation lists are type-level cons lists, `(A, (B, (C, ())))`, written with
//! [`relations!`](crate::relations). [`RelationSet`] folds over such a list to produce
//! the maximum relation lengths, the subrelation count, and the types of the sumcheck
//! and Protogalaxy accumulators. Every accumulator is itself a cons list (one entry per
//! relation) of cons lists (one entry per subrelation), so each relation gets exactly
//! the univariate lengths its own subrelations need.
use crate::{
  capabilities::IsFoldingFlavor,
  polys::univariate::Univariate,
  traits::{
    Flavor,
    relation::{ProtogalaxyRelation, Relation},
  },
};
use core::fmt::Debug;
use ff::PrimeField;

/// A container whose leaves are univariates or field values.
pub trait ShapedContainer: Clone + Debug + Default + Send + Sync {
  /// Lengths of the leaves, in order. A field value has length 1.
  fn lengths(&self) -> Vec<usize>;

  /// Resets every leaf to zero
  fn set_zero(&mut self);
}

/// A cons list of [`ShapedContainer`]s, one per relation.
pub trait ShapedTuple: ShapedContainer {
  /// Leaf lengths, grouped per relation
  fn shape(&self) -> Vec<Vec<usize>>;
}

/// One field value per subrelation of a relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayOfValues<F: PrimeField, const N: usize> {
  /// The values, one per subrelation
  pub values: [F; N],
}

impl<F: PrimeField, const N: usize> Default for ArrayOfValues<F, N> {
  fn default() -> Self {
    ArrayOfValues {
      values: [F::ZERO; N],
    }
  }
}

impl<F: PrimeField, const N: usize> ShapedContainer for ArrayOfValues<F, N> {
  fn lengths(&self) -> Vec<usize> {
    vec![1; N]
  }

  fn set_zero(&mut self) {
    self.values = [F::ZERO; N];
  }
}

impl<F: PrimeField, const LENGTH: usize, const SKIP_COUNT: usize> ShapedContainer
  for Univariate<F, LENGTH, SKIP_COUNT>
{
  fn lengths(&self) -> Vec<usize> {
    vec![LENGTH]
  }

  fn set_zero(&mut self) {
    *self = Self::zero();
  }
}

impl ShapedContainer for () {
  fn lengths(&self) -> Vec<usize> {
    Vec::new()
  }

  fn set_zero(&mut self) {}
}

impl<H: ShapedContainer, T: ShapedContainer> ShapedContainer for (H, T) {
  fn lengths(&self) -> Vec<usize> {
    let mut lengths = self.0.lengths();
    lengths.extend(self.1.lengths());
    lengths
  }

  fn set_zero(&mut self) {
    self.0.set_zero();
    self.1.set_zero();
  }
}

impl ShapedTuple for () {
  fn shape(&self) -> Vec<Vec<usize>> {
    Vec::new()
  }
}

impl<H: ShapedContainer, T: ShapedTuple> ShapedTuple for (H, T) {
  fn shape(&self) -> Vec<Vec<usize>> {
    let mut shape = vec![self.0.lengths()];
    shape.extend(self.1.shape());
    shape
  }
}

const fn max(a: usize, b: usize) -> usize {
  if a > b { a } else { b }
}

/// A cons list of relations
pub trait RelationSet: Send + Sync + 'static {
  /// Number of relations in the list
  const NUM_RELATIONS: usize;

  /// Maximum partial length over every subrelation
  const MAX_PARTIAL_RELATION_LENGTH: usize;

  /// Maximum total length over every subrelation
  const MAX_TOTAL_RELATION_LENGTH: usize;

  /// Number of subrelations over every relation
  const NUMBER_OF_SUBRELATIONS: usize;

  /// Per relation, one univariate per subrelation sized by its partial length
  type SumcheckTupleOfTuplesOfUnivariates<F: PrimeField>: ShapedTuple;

  /// Per relation, one value per subrelation
  type TupleOfArraysOfValues<F: PrimeField>: ShapedTuple;

  /// Names of the relations, in order
  fn names() -> Vec<&'static str>;

  /// Partial lengths of the subrelations, per relation
  fn partial_lengths() -> Vec<&'static [usize]>;

  /// Total lengths of the subrelations, per relation
  fn total_lengths() -> Vec<&'static [usize]>;
}

impl RelationSet for () {
  const NUM_RELATIONS: usize = 0;
  const MAX_PARTIAL_RELATION_LENGTH: usize = 0;
  const MAX_TOTAL_RELATION_LENGTH: usize = 0;
  const NUMBER_OF_SUBRELATIONS: usize = 0;

  type SumcheckTupleOfTuplesOfUnivariates<F: PrimeField> = ();
  type TupleOfArraysOfValues<F: PrimeField> = ();

  fn names() -> Vec<&'static str> {
    Vec::new()
  }

  fn partial_lengths() -> Vec<&'static [usize]> {
    Vec::new()
  }

  fn total_lengths() -> Vec<&'static [usize]> {
    Vec::new()
  }
}

impl<H: Relation, T: RelationSet> RelationSet for (H, T) {
  const NUM_RELATIONS: usize = 1 + T::NUM_RELATIONS;
  const MAX_PARTIAL_RELATION_LENGTH: usize =
    max(H::RELATION_LENGTH, T::MAX_PARTIAL_RELATION_LENGTH);
  const MAX_TOTAL_RELATION_LENGTH: usize =
    max(H::TOTAL_RELATION_LENGTH, T::MAX_TOTAL_RELATION_LENGTH);
  const NUMBER_OF_SUBRELATIONS: usize = H::NUM_SUBRELATIONS + T::NUMBER_OF_SUBRELATIONS;

  type SumcheckTupleOfTuplesOfUnivariates<F: PrimeField> = (
    H::SumcheckUnivariates<F>,
    T::SumcheckTupleOfTuplesOfUnivariates<F>,
  );
  type TupleOfArraysOfValues<F: PrimeField> = (H::ArrayOfValues<F>, T::TupleOfArraysOfValues<F>);

  fn names() -> Vec<&'static str> {
    let mut names = vec![H::NAME];
    names.extend(T::names());
    names
  }

  fn partial_lengths() -> Vec<&'static [usize]> {
    let mut lengths = vec![H::SUBRELATION_PARTIAL_LENGTHS];
    lengths.extend(T::partial_lengths());
    lengths
  }

  fn total_lengths() -> Vec<&'static [usize]> {
    let mut lengths = vec![H::SUBRELATION_TOTAL_LENGTHS];
    lengths.extend(T::total_lengths());
    lengths
  }
}

/// Protogalaxy accumulator shapes of a relation list, for `NUM_INSTANCES` instances
pub trait ProtogalaxyRelations<const NUM_INSTANCES: usize>: RelationSet {
  /// Per relation, one univariate per subrelation over the folded domain
  type ProtogalaxyTupleOfTuplesOfUnivariates<F: PrimeField>: ShapedTuple;

  /// As above, with the evaluations at `1..NUM_INSTANCES` left uncomputed
  type OptimisedProtogalaxyTupleOfTuplesOfUnivariates<F: PrimeField>: ShapedTuple;
}

impl<const NUM_INSTANCES: usize> ProtogalaxyRelations<NUM_INSTANCES> for () {
  type ProtogalaxyTupleOfTuplesOfUnivariates<F: PrimeField> = ();
  type OptimisedProtogalaxyTupleOfTuplesOfUnivariates<F: PrimeField> = ();
}

impl<const NUM_INSTANCES: usize, H, T> ProtogalaxyRelations<NUM_INSTANCES> for (H, T)
where
  H: ProtogalaxyRelation<NUM_INSTANCES>,
  T: ProtogalaxyRelations<NUM_INSTANCES>,
{
  type ProtogalaxyTupleOfTuplesOfUnivariates<F: PrimeField> = (
    <H as ProtogalaxyRelation<NUM_INSTANCES>>::Univariates<F>,
    <T as ProtogalaxyRelations<NUM_INSTANCES>>::ProtogalaxyTupleOfTuplesOfUnivariates<F>,
  );
  type OptimisedProtogalaxyTupleOfTuplesOfUnivariates<F: PrimeField> = (
    <H as ProtogalaxyRelation<NUM_INSTANCES>>::OptimisedUnivariates<F>,
    <T as ProtogalaxyRelations<NUM_INSTANCES>>::OptimisedProtogalaxyTupleOfTuplesOfUnivariates<F>,
  );
}

/// Builds the type-level list of relations.
///
/// `relations![A, B, C]` is `(A, (B, (C, ())))`.
#[macro_export]
macro_rules! relations {
  () => { () };
  ($head:ty $(, $tail:ty)* $(,)?) => {
    ($head, $crate::relations!($($tail),*))
  };
}

/// Maximum partial length over the subrelations of `R`
pub const fn compute_max_partial_relation_length<R: RelationSet>() -> usize {
  R::MAX_PARTIAL_RELATION_LENGTH
}

/// Maximum total length over the subrelations of `R`
pub const fn compute_max_total_relation_length<R: RelationSet>() -> usize {
  R::MAX_TOTAL_RELATION_LENGTH
}

/// Number of subrelations of `R`
pub const fn compute_number_of_subrelations<R: RelationSet>() -> usize {
  R::NUMBER_OF_SUBRELATIONS
}

/// Zero-initialised sumcheck accumulator for the relations `R`
pub fn create_sumcheck_tuple_of_tuples_of_univariates<R: RelationSet, F: PrimeField>()
-> R::SumcheckTupleOfTuplesOfUnivariates<F> {
  Default::default()
}

/// Zero-initialised per-subrelation evaluations for the relations `R`
pub fn create_tuple_of_arrays_of_values<R: RelationSet, F: PrimeField>()
-> R::TupleOfArraysOfValues<F> {
  Default::default()
}

/// Zero-initialised Protogalaxy accumulator of a folding flavor, for `N` instances
pub fn create_protogalaxy_tuple_of_tuples_of_univariates<Fl, const N: usize>()
-> <Fl::Relations as ProtogalaxyRelations<N>>::ProtogalaxyTupleOfTuplesOfUnivariates<
  <Fl::E as crate::traits::Engine>::Scalar,
>
where
  Fl: Flavor + IsFoldingFlavor,
  Fl::Relations: ProtogalaxyRelations<N>,
{
  Default::default()
}

/// As [`create_protogalaxy_tuple_of_tuples_of_univariates`], with skipped evaluations
pub fn create_optimised_protogalaxy_tuple_of_tuples_of_univariates<Fl, const N: usize>()
-> <Fl::Relations as ProtogalaxyRelations<N>>::OptimisedProtogalaxyTupleOfTuplesOfUnivariates<
  <Fl::E as crate::traits::Engine>::Scalar,
>
where
  Fl: Flavor + IsFoldingFlavor,
  Fl::Relations: ProtogalaxyRelations<N>,
{
  Default::default()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{provider::bn254::Scalar as Fr, traits::relation::max_length};
  use ff::Field;
  use proptest::prelude::*;

  crate::define_relation! {
    /// Quadratic
    pub struct Quadratic {
      name: "Quadratic",
      partial: [3],
      total: [3],
    }
  }

  crate::define_relation! {
    /// Two subrelations, one of which picks up parameter degree
    pub struct Mixed {
      name: "Mixed",
      partial: [6, 4],
      total: [6, 7],
    }
  }

  type Pair = crate::relations![Quadratic, Mixed];

  #[test]
  fn test_empty_list() {
    assert_eq!(compute_max_partial_relation_length::<()>(), 0);
    assert_eq!(compute_max_total_relation_length::<()>(), 0);
    assert_eq!(compute_number_of_subrelations::<()>(), 0);
    assert!(<()>::names().is_empty());
  }

  #[test]
  fn test_folds() {
    assert_eq!(<Pair as RelationSet>::NUM_RELATIONS, 2);
    assert_eq!(compute_max_partial_relation_length::<Pair>(), 6);
    assert_eq!(compute_max_total_relation_length::<Pair>(), 7);
    assert_eq!(compute_number_of_subrelations::<Pair>(), 3);
    assert_eq!(<Pair as RelationSet>::names(), vec!["Quadratic", "Mixed"]);
  }

  #[test]
  fn test_sumcheck_shape() {
    let mut tuple = create_sumcheck_tuple_of_tuples_of_univariates::<Pair, Fr>();
    assert_eq!(tuple.shape(), vec![vec![3], vec![6, 4]]);
    assert!(tuple.0.0.is_zero());

    tuple.1.0.0.evaluations[2] = Fr::ONE;
    assert!(!tuple.1.0.0.is_zero());
    tuple.set_zero();
    assert!(tuple.1.0.0.is_zero());
  }

  #[test]
  fn test_values_shape() {
    let mut values = create_tuple_of_arrays_of_values::<Pair, Fr>();
    assert_eq!(values.shape(), vec![vec![1], vec![1, 1]]);
    values.1.0.values[1] = Fr::from(5);
    values.set_zero();
    assert_eq!(values.1.0.values, [Fr::ZERO; 2]);
  }

  #[test]
  fn test_protogalaxy_shape() {
    let two: <Pair as ProtogalaxyRelations<2>>::ProtogalaxyTupleOfTuplesOfUnivariates<Fr> =
      Default::default();
    assert_eq!(two.shape(), vec![vec![3], vec![6, 7]]);

    let three: <Pair as ProtogalaxyRelations<3>>::ProtogalaxyTupleOfTuplesOfUnivariates<Fr> =
      Default::default();
    assert_eq!(three.shape(), vec![vec![5], vec![11, 13]]);

    let optimised: <Pair as ProtogalaxyRelations<3>>::OptimisedProtogalaxyTupleOfTuplesOfUnivariates<
      Fr,
    > = Default::default();
    assert_eq!(optimised.shape(), three.shape());
    assert_eq!(optimised.0.0.skipped_indices(), 1..=2);
  }

  #[test]
  fn test_lengths_agree_with_descriptors() {
    let max_partial = <Pair as RelationSet>::partial_lengths()
      .into_iter()
      .flatten()
      .copied()
      .max()
      .unwrap_or(0);
    assert_eq!(max_partial, compute_max_partial_relation_length::<Pair>());

    let count: usize = <Pair as RelationSet>::partial_lengths().iter().map(|l| l.len()).sum();
    assert_eq!(count, compute_number_of_subrelations::<Pair>());
  }

  proptest! {
    #[test]
    fn test_max_length_matches_iterator(lengths in prop::collection::vec(0usize..64, 0..16)) {
      prop_assert_eq!(max_length(&lengths), lengths.iter().copied().max().unwrap_or(0));
    }
  }
}
