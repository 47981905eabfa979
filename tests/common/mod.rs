use consistent_hash_router::core::HashRing;
use rand::Rng;

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

// Generate n random 16-byte alphanumeric keys
pub fn generate_keys<T: Rng>(rng: &mut T, n: usize) -> Vec<String> {
	(0..n)
		.map(|_| {
			(0..16)
				.map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
				.collect()
		})
		.collect()
}

// Owner of every key in order
pub fn owners(ring: &HashRing, keys: &[String]) -> Vec<String> {
	keys.iter()
		.map(|k| ring.pick_node(k).unwrap_or_default().to_string())
		.collect()
}
