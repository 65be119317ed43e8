use ff::Field;
use honk_flavor::{
  FF, PCS,
  capabilities::{is_grumpkin_flavor, is_honk_flavor},
  digest::VkHashLayout,
  entities::Entities,
  errors::FlavorError,
  field_conversion::to_buffer,
  flavors::{AvmFlavor, ECCVMFlavor, MegaFlavor, UltraFlavor},
  polys::polynomial::Polynomial,
  proving_key::{ProvingKey, UnionProvingKey},
  traits::{Flavor, pcs::PCSEngineTrait},
  verification_key::VerificationKey,
};
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use sha2::{Digest, Sha256};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_target(false)
    .with_ansi(true)
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();
}

fn random_union_key<F: Flavor>(circuit_size: usize, seed: u64) -> UnionProvingKey<F> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut pk = UnionProvingKey::<F>::new(circuit_size, 2).unwrap();
  for poly in pk.get_precomputed_polynomials_mut() {
    for c in poly.coeffs_mut() {
      *c = FF::<F>::random(&mut rng);
    }
  }
  pk
}

#[test]
fn proving_key_metadata() {
  init_tracing();
  let pk = ProvingKey::<UltraFlavor>::new(1024, 3).unwrap();
  assert_eq!(pk.circuit_size, 1024);
  assert_eq!(pk.log_circuit_size, 10);
  assert_eq!(pk.num_public_inputs, 3);
  assert_eq!(pk.pub_inputs_offset, 0);
  assert!(!pk.contains_recursive_proof);
  assert!(pk.public_inputs.is_empty());
  assert_eq!(pk.evaluation_domain.size, 1024);
  assert_eq!(
    PCS::<UltraFlavor>::commitment_key_length(&pk.commitment_key),
    1025
  );

  for size in [0, 3, 1000] {
    assert_eq!(
      ProvingKey::<UltraFlavor>::new(size, 0).err(),
      Some(FlavorError::InvalidCircuitSize { size })
    );
  }
}

#[test]
fn union_proving_key_allocates_every_polynomial() {
  init_tracing();
  let pk = UnionProvingKey::<MegaFlavor>::new(64, 0).unwrap();
  assert_eq!(
    pk.get_all().len(),
    MegaFlavor::NUM_PRECOMPUTED_ENTITIES + MegaFlavor::NUM_WITNESS_ENTITIES
  );
  assert!(pk.get_all().iter().all(|p| p.len() == 64 && p.coeffs().iter().all(|c| bool::from(c.is_zero()))));
  assert_eq!(pk.get_labels()[0], "q_m");
}

#[test]
fn grumpkin_flavor_keys() {
  init_tracing();
  assert!(is_grumpkin_flavor::<ECCVMFlavor>());
  assert!(!is_honk_flavor::<ECCVMFlavor>());
  let pk = random_union_key::<ECCVMFlavor>(256, 1);
  assert!(pk.evaluation_domain.root.is_none());
  assert!(pk.evaluation_domain.roots_of_unity().is_empty());
  let vk = VerificationKey::from_union_proving_key(&pk).unwrap();
  assert_eq!(vk.log_circuit_size(), 8);
  assert!(vk.hash().is_ok());
}

#[test]
fn verification_key_hash_is_sha256_of_zero_prefixed_buffer() {
  init_tracing();
  let pk = random_union_key::<UltraFlavor>(32, 7);
  let vk = VerificationKey::from_union_proving_key(&pk).unwrap();
  let elements = vk.to_field_elements();
  assert_eq!(elements[0], FF::<UltraFlavor>::from(32));
  assert_eq!(elements[1], FF::<UltraFlavor>::from(2));

  let mut buffer = vec![0u8; 32 * elements.len()];
  buffer.extend(to_buffer(&elements));
  let expected = BigUint::from_bytes_be(&Sha256::digest(&buffer));
  assert_eq!(vk.hash().unwrap(), expected);
  assert_eq!(vk.hash_with_layout(VkHashLayout::ZeroPrefixed).unwrap(), expected);
  assert!(expected.bits() <= 256);
}

#[test]
fn verification_key_is_deterministic() {
  init_tracing();
  let a = VerificationKey::from_union_proving_key(&random_union_key::<AvmFlavor>(16, 3)).unwrap();
  let b = VerificationKey::from_union_proving_key(&random_union_key::<AvmFlavor>(16, 3)).unwrap();
  let c = VerificationKey::from_union_proving_key(&random_union_key::<AvmFlavor>(16, 4)).unwrap();
  assert_eq!(a, b);
  assert_eq!(a.hash().unwrap(), b.hash().unwrap());
  assert_ne!(a.hash().unwrap(), c.hash().unwrap());
}

#[test]
fn verification_key_serde_round_trip_preserves_hash() {
  init_tracing();
  let vk = VerificationKey::from_union_proving_key(&random_union_key::<MegaFlavor>(16, 9)).unwrap();
  let bytes = bincode::serialize(&vk).unwrap();
  let back: VerificationKey<MegaFlavor> = bincode::deserialize(&bytes).unwrap();
  assert_eq!(back, vk);
  assert_eq!(back.hash().unwrap(), vk.hash().unwrap());
}

#[test]
fn commitments_match_direct_commit() {
  init_tracing();
  let pk = random_union_key::<UltraFlavor>(16, 11);
  let vk = VerificationKey::from_union_proving_key(&pk).unwrap();
  for (poly, comm) in pk
    .get_precomputed_polynomials()
    .iter()
    .zip(vk.commitments().get_all())
  {
    let expected = PCS::<UltraFlavor>::commit(&pk.commitment_key, poly.coeffs()).unwrap();
    assert_eq!(*comm, expected);
  }
}

proptest! {
  #![proptest_config(ProptestConfig { cases: 16, .. ProptestConfig::default() })]
  #[test]
  fn field_elements_round_trip(log_size in 1usize..=6, seed in any::<u64>(), offset in 0usize..8) {
    let mut vk = VerificationKey::from_union_proving_key(
      &random_union_key::<UltraFlavor>(1 << log_size, seed),
    ).unwrap();
    vk.set_pub_inputs_offset(offset);
    let back = VerificationKey::<UltraFlavor>::from_field_elements(&vk.to_field_elements()).unwrap();
    prop_assert_eq!(back.circuit_size(), 1 << log_size);
    prop_assert_eq!(back.pub_inputs_offset(), offset);
    prop_assert_eq!(back.hash().unwrap(), vk.hash().unwrap());
  }

  #[test]
  fn polynomial_shift_is_a_view(values in proptest::collection::vec(any::<u64>(), 1..32)) {
    let poly = Polynomial::from_coeffs(
      values.iter().map(|v| FF::<UltraFlavor>::from(*v)).collect::<Vec<_>>(),
    );
    prop_assert_eq!(poly.shifted().len(), poly.len() - 1);
    prop_assert_eq!(poly.shifted(), &poly.coeffs()[1..]);
  }
}
