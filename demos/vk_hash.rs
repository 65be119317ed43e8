//! Builds keys for each shipped flavor over a small circuit and prints the
//! verification key hashes.
//!
//! Run with `RUST_LOG=info cargo run --release --example vk_hash`.
use ff::Field;
use honk_flavor::{
  FF,
  digest::VkHashLayout,
  flavors::{AvmFlavor, ECCVMFlavor, MegaFlavor, UltraFlavor},
  proving_key::UnionProvingKey,
  traits::Flavor,
  verification_key::VerificationKey,
};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;
use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

const LOG_CIRCUIT_SIZE: usize = 10;

fn report<F: Flavor>(name: &str) {
  let _flavor_span = info_span!("flavor", name).entered();
  let mut rng = StdRng::seed_from_u64(0);

  let t0 = Instant::now();
  let mut pk = UnionProvingKey::<F>::new(1 << LOG_CIRCUIT_SIZE, 1).expect("proving key failed");
  for poly in pk.get_precomputed_polynomials_mut() {
    for c in poly.coeffs_mut() {
      *c = FF::<F>::random(&mut rng);
    }
  }
  info!(elapsed_ms = t0.elapsed().as_millis(), "proving_key");

  let t0 = Instant::now();
  let vk = VerificationKey::from_union_proving_key(&pk).expect("verification key failed");
  info!(elapsed_ms = t0.elapsed().as_millis(), "verification_key");

  let hash = vk.hash().expect("hash failed");
  let compact = vk
    .hash_with_layout(VkHashLayout::Compact)
    .expect("hash failed");
  println!(
    "{name:>8}: {} field elements, hash 0x{}, compact 0x{}",
    vk.to_field_elements().len(),
    hex::encode(hash.to_bytes_be()),
    hex::encode(compact.to_bytes_be()),
  );
}

fn main() {
  tracing_subscriber::fmt()
    .with_target(false)
    .with_ansi(false)
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  report::<UltraFlavor>("Ultra");
  report::<MegaFlavor>("Mega");
  report::<ECCVMFlavor>("ECCVM");
  report::<AvmFlavor>("AVM");
}
