use std::default::Default;
use super::hash::HashAlgorithm;

#[derive(Clone, Debug)]
pub struct Config {
	pub hash_algorithm: HashAlgorithm,
	/// nodes placed on the ring when the router is created
	pub initial_nodes: Vec<String>,
	/// max number of concurrent connections buffered
	pub max_connections: u64
}

impl Default for Config {
	fn default() -> Self {
		Self {
			hash_algorithm: HashAlgorithm::default(),
			initial_nodes: Vec::new(),
			max_connections: 16
		}
	}
}
