// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Named, fixed-size collections of the algebraic data of a flavor.
//!
//! A flavor describes its data as a handful of entity collections: a `[T; N]` backing
//! array with a label fixed at compile time for every position. Getters return borrows
//! into that array, so every view aliases the single backing store and the borrow
//! checker keeps views from outliving the collection.
//!
//! Collections are generated with [`define_entities!`](crate::define_entities), and the
//! four collections of a flavor (precomputed, witness, shifted, all) with
//! [`define_flavor_entities!`](crate::define_flavor_entities).
use crate::errors::FlavorError;
use core::ptr;

/// Label returned by [`flavor_get_label`] for data that is not part of the collection.
pub const UNKNOWN_LABEL: &str = "(unknown label)";

/// A fixed-length, compile-time-labelled sequence of values of one data kind.
pub trait Entities: Sized {
  /// The kind of data held in every slot (a polynomial, a commitment, a value, ...)
  type DataType;

  /// Number of entities in the collection
  const LEN: usize;

  /// One label per entity, order-aligned with [`Entities::get_all`]
  const LABELS: &'static [&'static str];

  /// Returns the labels of all entities
  fn get_labels(&self) -> &'static [&'static str] {
    Self::LABELS
  }

  /// Returns a view over every entity, in layout order
  fn get_all(&self) -> &[Self::DataType];

  /// Returns a mutable view over every entity, in layout order
  fn get_all_mut(&mut self) -> &mut [Self::DataType];

  /// Builds a collection by calling `f` once per label, in layout order
  fn from_fn<G: FnMut(&'static str) -> Self::DataType>(f: G) -> Self;

  /// Builds a collection from exactly [`Entities::LEN`] values
  fn try_from_vec(values: Vec<Self::DataType>) -> Result<Self, FlavorError>;

  /// Returns the entity with the given label, if any
  fn get_by_label(&self, label: &str) -> Option<&Self::DataType> {
    Self::LABELS
      .iter()
      .position(|l| *l == label)
      .map(|i| &self.get_all()[i])
  }

  /// Iterates over `(label, entity)` pairs
  fn iter_labeled(&self) -> impl Iterator<Item = (&'static str, &Self::DataType)> {
    Self::LABELS.iter().copied().zip(self.get_all())
  }
}

/// Collections holding both unshifted entities and their shifts.
///
/// Unshifted entities always precede shifted ones; the opening protocol relies on it.
pub trait ShiftableEntities: Entities {
  /// Every entity that is opened at the unshifted point
  fn get_unshifted(&self) -> &[Self::DataType];

  /// Every entity that is opened at the shifted point
  fn get_shifted(&self) -> &[Self::DataType];

  /// The unshifted entities whose shifts appear in [`ShiftableEntities::get_shifted`],
  /// in the same order
  fn get_to_be_shifted(&self) -> Vec<&Self::DataType>;
}

/// Concatenates the unshifted and shifted views of `all`, in that order.
pub fn get_unshifted_then_shifted<C: ShiftableEntities>(all: &C) -> Vec<&C::DataType> {
  all
    .get_unshifted()
    .iter()
    .chain(all.get_shifted())
    .collect()
}

/// Resolves `element` to its label by address; returns [`UNKNOWN_LABEL`] if `element`
/// does not live inside `container`.
pub fn flavor_get_label<C: Entities>(container: &C, element: &C::DataType) -> &'static str {
  container
    .iter_labeled()
    .find(|(_, data)| ptr::eq(*data, element))
    .map_or(UNKNOWN_LABEL, |(label, _)| label)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit {
  ($x:tt) => {
    ()
  };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __count {
  ($($x:tt)*) => {
    <[()]>::len(&[$($crate::__unit!($x)),*])
  };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entity_accessors {
  ($index:ident, $field:ident) => {
    $crate::paste::paste! {
      #[doc = concat!("Returns `", stringify!($field), "`")]
      #[inline]
      pub fn $field(&self) -> &T {
        &self.data[$index::$field as usize]
      }

      #[doc = concat!("Returns `", stringify!($field), "` mutably")]
      #[inline]
      pub fn [<$field _mut>](&mut self) -> &mut T {
        &mut self.data[$index::$field as usize]
      }
    }
  };
}

/// Defines an entity collection.
///
/// Fields are declared in contiguous named groups; each group gets a `get_<group>()`
/// slice getter. Optional selections pick arbitrary fields and get a `get_<selection>()`
/// getter returning an array of borrows.
///
/// ```ignore
/// define_entities! {
///   /// Wires and their grand product
///   pub struct Example {
///     wires: [w_l, w_r],
///     derived: [z_perm],
///   }
///   selections {
///     to_be_shifted: [w_l, z_perm],
///   }
/// }
/// ```
#[macro_export]
macro_rules! define_entities {
  (
    $(#[$meta:meta])*
    $vis:vis struct $name:ident {
      $( $group:ident : [ $first:ident $(, $field:ident)* $(,)? ] ),+ $(,)?
    }
    $(
      selections {
        $( $selection:ident : [ $($selected:ident),+ $(,)? ] ),* $(,)?
      }
    )?
  ) => {
    $crate::paste::paste! {
      #[allow(non_camel_case_types, dead_code, clippy::upper_case_acronyms)]
      #[derive(Clone, Copy)]
      enum [<$name Index>] {
        $( $first, $($field,)* )+
      }

      #[allow(non_upper_case_globals)]
      const [<__ $name _LEN>]: usize = $crate::__count!($( $first $($field)* )+);

      $(#[$meta])*
      #[derive(Clone, Debug, PartialEq, Eq)]
      $vis struct $name<T> {
        data: [T; [<__ $name _LEN>]],
      }

      impl<T> $name<T> {
        $(
          $crate::__entity_accessors!([<$name Index>], $first);
          $( $crate::__entity_accessors!([<$name Index>], $field); )*
        )+

        $(
          #[doc = concat!("Returns the `", stringify!($group), "` group as a contiguous view")]
          pub fn [<get_ $group>](&self) -> &[T] {
            let start = [<$name Index>]::$first as usize;
            &self.data[start..start + $crate::__count!($first $($field)*)]
          }

          #[doc = concat!("Returns the `", stringify!($group), "` group as a contiguous mutable view")]
          pub fn [<get_ $group _mut>](&mut self) -> &mut [T] {
            let start = [<$name Index>]::$first as usize;
            &mut self.data[start..start + $crate::__count!($first $($field)*)]
          }
        )+

        $($(
          #[doc = concat!("Returns the `", stringify!($selection), "` selection, in declaration order")]
          pub fn [<get_ $selection>](&self) -> [&T; $crate::__count!($($selected)+)] {
            [ $( &self.data[[<$name Index>]::$selected as usize] ),+ ]
          }
        )*)?
      }

      impl<T> $crate::entities::Entities for $name<T> {
        type DataType = T;

        const LEN: usize = [<__ $name _LEN>];

        const LABELS: &'static [&'static str] = &[
          $( stringify!($first), $(stringify!($field),)* )+
        ];

        fn get_all(&self) -> &[T] {
          &self.data
        }

        fn get_all_mut(&mut self) -> &mut [T] {
          &mut self.data
        }

        fn from_fn<G: FnMut(&'static str) -> T>(mut f: G) -> Self {
          let labels = <Self as $crate::entities::Entities>::LABELS;
          Self {
            data: core::array::from_fn(|i| f(labels[i])),
          }
        }

        fn try_from_vec(values: Vec<T>) -> Result<Self, $crate::errors::FlavorError> {
          let actual = values.len();
          let data = values.try_into().map_err(|_| {
            $crate::errors::FlavorError::InvalidEntityCount {
              expected: <Self as $crate::entities::Entities>::LEN,
              actual,
            }
          })?;
          Ok(Self { data })
        }
      }

      impl<T: Default> Default for $name<T> {
        fn default() -> Self {
          <Self as $crate::entities::Entities>::from_fn(|_| T::default())
        }
      }

      impl<T: $crate::serde::Serialize> $crate::serde::Serialize for $name<T> {
        fn serialize<S: $crate::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
          $crate::serde::Serialize::serialize(self.data.as_slice(), serializer)
        }
      }

      impl<'de, T: $crate::serde::Deserialize<'de>> $crate::serde::Deserialize<'de> for $name<T> {
        fn deserialize<D: $crate::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
          let values = <Vec<T> as $crate::serde::Deserialize<'de>>::deserialize(deserializer)?;
          let actual = values.len();
          <Self as $crate::entities::Entities>::try_from_vec(values).map_err(|_| {
            <D::Error as $crate::serde::de::Error>::invalid_length(
              actual,
              &concat!("the entity count of ", stringify!($name)),
            )
          })
        }
      }
    }
  };
}

/// Defines the precomputed, witness, shifted and "all" collections of a flavor from a
/// single field list. The "all" collection is laid out precomputed, witness, shifted
/// and implements [`ShiftableEntities`]. The `n`-th shifted entity is the shift of the
/// `n`-th entry of `to_be_shifted`.
#[macro_export]
macro_rules! define_flavor_entities {
  (
    $(#[$pre_meta:meta])*
    precomputed $pre:ident {
      $( $pg:ident : [ $($pf:ident),+ $(,)? ] ),+ $(,)?
    }
    $(#[$wit_meta:meta])*
    witness $wit:ident {
      $( $wg:ident : [ $($wf:ident),+ $(,)? ] ),+ $(,)?
    }
    $(#[$sh_meta:meta])*
    shifted $sh:ident [ $($sf:ident),+ $(,)? ]
    $(#[$all_meta:meta])*
    all $all:ident
    to_be_shifted [ $($tbs:ident),+ $(,)? ]
  ) => {
    $crate::define_entities! {
      $(#[$pre_meta])*
      pub struct $pre {
        $( $pg: [$($pf),+], )+
      }
    }

    $crate::define_entities! {
      $(#[$wit_meta])*
      pub struct $wit {
        $( $wg: [$($wf),+], )+
      }
    }

    $crate::define_entities! {
      $(#[$sh_meta])*
      pub struct $sh {
        shifted: [$($sf),+],
      }
    }

    $crate::define_entities! {
      $(#[$all_meta])*
      pub struct $all {
        $( $pg: [$($pf),+], )+
        $( $wg: [$($wf),+], )+
        shifted: [$($sf),+],
      }
      selections {
        to_be_shifted: [$($tbs),+],
      }
    }

    const _: () = assert!(
      $crate::__count!($($sf)+) == $crate::__count!($($tbs)+),
      "every shifted entity needs exactly one to-be-shifted source"
    );

    impl<T> $all<T> {
      /// Returns the precomputed entities as a contiguous view
      pub fn get_precomputed(&self) -> &[T] {
        let end = <$pre<T> as $crate::entities::Entities>::LEN;
        &<Self as $crate::entities::Entities>::get_all(self)[..end]
      }

      /// Returns the witness entities as a contiguous view
      pub fn get_witness(&self) -> &[T] {
        let start = <$pre<T> as $crate::entities::Entities>::LEN;
        let end = start + <$wit<T> as $crate::entities::Entities>::LEN;
        &<Self as $crate::entities::Entities>::get_all(self)[start..end]
      }
    }

    impl<T> $crate::entities::ShiftableEntities for $all<T> {
      fn get_unshifted(&self) -> &[T] {
        let end = <$pre<T> as $crate::entities::Entities>::LEN
          + <$wit<T> as $crate::entities::Entities>::LEN;
        &<Self as $crate::entities::Entities>::get_all(self)[..end]
      }

      fn get_shifted(&self) -> &[T] {
        let start = <$pre<T> as $crate::entities::Entities>::LEN
          + <$wit<T> as $crate::entities::Entities>::LEN;
        &<Self as $crate::entities::Entities>::get_all(self)[start..]
      }

      fn get_to_be_shifted(&self) -> Vec<&T> {
        $all::<T>::get_to_be_shifted(self).to_vec()
      }
    }
  };
}

#[cfg(test)]
#[allow(dead_code)]
mod tests {
  use super::*;

  crate::define_entities! {
    /// A small collection used to exercise the generated accessors
    pub struct Sample {
      wires: [w_l, w_r, w_o],
      derived: [z_perm],
    }
    selections {
      to_be_shifted: [w_l, z_perm],
    }
  }

  crate::define_flavor_entities! {
    /// Precomputed
    precomputed TinyPrecomputed {
      selectors: [q_m, q_c],
      lagrange: [lagrange_first],
    }
    /// Witness
    witness TinyWitness {
      wires: [w_l, w_r],
      derived: [z_perm],
    }
    /// Shifted
    shifted TinyShifted [w_l_shift, z_perm_shift]
    /// All
    all TinyAll
    to_be_shifted [w_l, z_perm]
  }

  fn numbered<C: Entities<DataType = usize>>() -> C {
    let mut counter = 0;
    C::from_fn(|_| {
      counter += 1;
      counter
    })
  }

  #[test]
  fn test_named_accessors_alias_backing_store() {
    let mut sample: Sample<usize> = numbered();
    assert_eq!(Sample::<usize>::LEN, 4);
    assert_eq!(*sample.w_l(), 1);
    assert_eq!(*sample.z_perm(), 4);
    *sample.w_r_mut() = 42;
    assert_eq!(sample.get_all()[1], 42);
    assert!(ptr::eq(sample.w_o(), &sample.get_all()[2]));
    assert_eq!(sample.get_wires(), &[1, 42, 3]);
    assert_eq!(sample.get_derived(), &[4]);
    let [first, second] = sample.get_to_be_shifted();
    assert!(ptr::eq(first, sample.w_l()));
    assert!(ptr::eq(second, sample.z_perm()));
  }

  #[test]
  fn test_derived_traits() {
    let sample: Sample<usize> = numbered();
    let mut copy = sample.clone();
    assert_eq!(copy, sample);
    *copy.z_perm_mut() = 0;
    assert_ne!(copy, sample);
    assert!(format!("{sample:?}").contains("data: [1, 2, 3, 4]"));
    assert_eq!(TinyAll::<u8>::default().get_all(), &[0u8; 8]);
  }

  #[test]
  fn test_labels_aligned_with_get_all() {
    let sample: Sample<usize> = numbered();
    assert_eq!(sample.get_labels().len(), sample.get_all().len());
    assert_eq!(sample.get_labels(), &["w_l", "w_r", "w_o", "z_perm"]);
    assert_eq!(sample.get_by_label("w_o"), Some(&3));
    assert_eq!(sample.get_by_label("q_m"), None);
  }

  #[test]
  fn test_flavor_get_label() {
    let sample: Sample<usize> = numbered();
    for (label, value) in sample.iter_labeled() {
      assert_eq!(flavor_get_label(&sample, value), label);
    }
    let stranger = 1usize;
    assert_eq!(flavor_get_label(&sample, &stranger), UNKNOWN_LABEL);

    // equal values in another collection are not members
    let other: Sample<usize> = numbered();
    assert_eq!(flavor_get_label(&sample, other.w_l()), UNKNOWN_LABEL);
  }

  #[test]
  fn test_flavor_entities_layout() {
    let all: TinyAll<usize> = numbered();
    let expected: Vec<&str> = TinyPrecomputed::<usize>::LABELS
      .iter()
      .chain(TinyWitness::<usize>::LABELS)
      .chain(TinyShifted::<usize>::LABELS)
      .copied()
      .collect();
    assert_eq!(all.get_labels(), expected.as_slice());
    assert_eq!(all.get_precomputed(), &[1, 2, 3]);
    assert_eq!(all.get_witness(), &[4, 5, 6]);
    assert_eq!(all.get_unshifted(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(ShiftableEntities::get_shifted(&all), &[7, 8]);
    assert_eq!(
      ShiftableEntities::get_to_be_shifted(&all),
      vec![all.w_l(), all.z_perm()]
    );
  }

  #[test]
  fn test_unshifted_then_shifted_preserves_identity() {
    let all: TinyAll<usize> = numbered();
    let unshifted = all.get_unshifted();
    let shifted = ShiftableEntities::get_shifted(&all);
    let concatenated = get_unshifted_then_shifted(&all);
    assert_eq!(concatenated.len(), unshifted.len() + shifted.len());
    for (view, original) in concatenated.iter().zip(unshifted.iter().chain(shifted)) {
      assert!(ptr::eq(*view, original));
    }
  }

  #[test]
  fn test_try_from_vec_checks_length() {
    assert!(Sample::<u8>::try_from_vec(vec![1, 2, 3, 4]).is_ok());
    assert_eq!(
      Sample::<u8>::try_from_vec(vec![1, 2, 3]),
      Err(FlavorError::InvalidEntityCount {
        expected: 4,
        actual: 3
      })
    );
  }

  #[test]
  fn test_serde_round_trip() {
    let sample: Sample<usize> = numbered();
    let bytes = bincode::serialize(&sample).unwrap();
    let back: Sample<usize> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(sample, back);

    let short = bincode::serialize(&vec![1usize, 2]).unwrap();
    assert!(bincode::deserialize::<Sample<usize>>(&short).is_err());
  }
}
