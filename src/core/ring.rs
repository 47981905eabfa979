use std::collections::HashMap;
use log::{debug, warn};
use tarpc::serde::{Serialize, Deserialize};
use super::hash::{HashFunc, crc32_ieee};

/// A point on the ring [0, 2^32)
pub type Position = u32;

/// One occupied slot on the ring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingMember {
	pub position: Position,
	pub node: String
}

impl std::fmt::Display for RingMember {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} @ {}", self.node, self.position)
	}
}

/// Consistent hashing ring with one position per node.
///
/// A key is owned by the node at the first position >= hash(key),
/// wrapping around to the smallest position.
/// The ring is not synchronized; callers serialize concurrent access.
#[derive(Clone)]
pub struct HashRing<H = HashFunc> {
	hash_function: H,
	// sorted, each distinct position exactly once
	positions: Vec<Position>,
	node_by_position: HashMap<Position, String>
}

impl HashRing<HashFunc> {
	/// Empty ring using CRC32 (IEEE)
	pub fn new() -> Self {
		Self::with_hash_function(crc32_ieee)
	}
}

impl Default for HashRing<HashFunc> {
	fn default() -> Self {
		Self::new()
	}
}

impl From<Option<HashFunc>> for HashRing<HashFunc> {
	fn from(hash_function: Option<HashFunc>) -> Self {
		Self::with_hash_function(hash_function.unwrap_or(crc32_ieee))
	}
}

impl<H: Fn(&[u8]) -> u32> HashRing<H> {
	pub fn with_hash_function(hash_function: H) -> Self {
		HashRing {
			hash_function,
			positions: Vec::new(),
			node_by_position: HashMap::new()
		}
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// Number of distinct occupied positions
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn positions(&self) -> &[Position] {
		&self.positions
	}

	/// Place nodes on the ring.
	/// Empty identifiers are skipped.
	/// A node whose hash collides with an existing position takes it over.
	pub fn add_node<I, S>(&mut self, nodes: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>
	{
		for node in nodes {
			let node = node.as_ref();
			if node.is_empty() {
				continue;
			}

			let hash = (self.hash_function)(node.as_bytes());
			match self.node_by_position.insert(hash, node.to_string()) {
				Some(prev) => {
					if prev != node {
						warn!("position {} taken over by {} (was {})", hash, node, prev);
					}
				},
				None => self.positions.push(hash)
			};
			debug!("added node {} at position {}", node, hash);
		}
		self.positions.sort_unstable();
	}

	/// Find the node owning `key`; None if the ring is empty
	pub fn pick_node(&self, key: &str) -> Option<&str> {
		if self.is_empty() {
			return None;
		}

		let hash = (self.hash_function)(key.as_bytes());
		// lower bound: first position >= hash
		let mut idx = self.positions.partition_point(|&p| p < hash);
		// cycle back to the smallest position
		if idx == self.positions.len() {
			idx = 0;
		}

		self.node_by_position
			.get(&self.positions[idx])
			.map(String::as_str)
	}

	/// Occupied slots in ring order
	pub fn members(&self) -> Vec<RingMember> {
		self.positions
			.iter()
			.filter_map(|p| {
				self.node_by_position.get(p).map(|node| RingMember {
					position: *p,
					node: node.clone()
				})
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	// Fixed positions for named nodes; numeric keys hash to their value
	fn stub_hash(data: &[u8]) -> u32 {
		match data {
			b"A" => 10,
			b"B" => 20,
			b"C" => 30,
			b"X" | b"Y" => 10,
			_ => std::str::from_utf8(data)
				.ok()
				.and_then(|s| s.parse().ok())
				.unwrap_or(0)
		}
	}

	fn stub_ring() -> HashRing {
		let mut ring = HashRing::with_hash_function(stub_hash as HashFunc);
		ring.add_node(["A", "B", "C"]);
		ring
	}

	#[test]
	fn test_empty_ring() {
		let mut ring = HashRing::new();
		assert!(ring.is_empty());
		assert_eq!(ring.pick_node("any"), None);
		assert_eq!(ring.pick_node(""), None);

		ring.add_node(["a"]);
		assert!(!ring.is_empty());
		assert_eq!(ring.pick_node("any"), Some("a"));
	}

	#[test]
	fn test_deterministic_membership() {
		let mut ring = HashRing::new();
		ring.add_node(["a", "b", "c"]);

		for i in 0..1000 {
			let key = format!("key-{}", i);
			let node = ring.pick_node(&key).unwrap();
			assert!(["a", "b", "c"].contains(&node));
			assert_eq!(ring.pick_node(&key), Some(node));
		}
		// empty key is an ordinary key
		assert!(ring.pick_node("").is_some());
	}

	#[test]
	fn test_wrap_around() {
		let ring = stub_ring();
		assert_eq!(ring.pick_node("35"), Some("A"));
		assert_eq!(ring.pick_node("4294967295"), Some("A"));
	}

	#[test]
	fn test_lower_bound() {
		let ring = stub_ring();
		assert_eq!(ring.pick_node("20"), Some("B"));
		assert_eq!(ring.pick_node("15"), Some("B"));
		assert_eq!(ring.pick_node("5"), Some("A"));
		assert_eq!(ring.pick_node("10"), Some("A"));
		assert_eq!(ring.pick_node("30"), Some("C"));
		assert_eq!(ring.pick_node("0"), Some("A"));
	}

	#[test]
	fn test_skip_empty_identifier() {
		let mut ring = HashRing::new();
		ring.add_node(["", "x"]);
		assert!(!ring.is_empty());
		assert_eq!(ring.len(), 1);
		for key in ["", "a", "b", "some longer key"] {
			assert_eq!(ring.pick_node(key), Some("x"));
		}

		let mut ring = HashRing::new();
		ring.add_node([""]);
		assert!(ring.is_empty());
	}

	#[test]
	fn test_insertion_order_independent() {
		let nodes = ["n1", "n2", "n3", "n4", "n5"];
		let mut batched = HashRing::new();
		batched.add_node(nodes);

		let mut incremental = HashRing::new();
		for node in nodes.iter().rev() {
			incremental.add_node([node]);
		}

		assert_eq!(batched.positions(), incremental.positions());
		assert!(batched.positions().windows(2).all(|w| w[0] < w[1]));
		assert_eq!(batched.members(), incremental.members());
		for i in 0..500 {
			let key = i.to_string();
			assert_eq!(batched.pick_node(&key), incremental.pick_node(&key));
		}
	}

	#[test]
	fn test_collision_last_write_wins() {
		let mut ring = HashRing::with_hash_function(stub_hash as HashFunc);
		ring.add_node(["X"]);
		ring.add_node(["Y"]);
		assert_eq!(ring.len(), 1);
		assert_eq!(ring.positions(), &[10]);
		assert_eq!(ring.pick_node("7"), Some("Y"));

		// re-adding a node keeps a single position
		ring.add_node(["Y", "Y"]);
		assert_eq!(ring.len(), 1);
	}

	#[test]
	fn test_members_in_ring_order() {
		let mut ring = HashRing::with_hash_function(stub_hash as HashFunc);
		ring.add_node(["C", "A", "B"]);
		let members: Vec<_> = ring.members()
			.into_iter()
			.map(|m| (m.position, m.node))
			.collect();
		assert_eq!(members, vec![
			(10, "A".to_string()),
			(20, "B".to_string()),
			(30, "C".to_string())
		]);
	}

	#[test]
	fn test_closure_hash_function() {
		let mut ring = HashRing::with_hash_function(|data: &[u8]| data.len() as u32);
		ring.add_node(["aa", "aaaa"]);
		assert_eq!(ring.pick_node("a"), Some("aa"));
		assert_eq!(ring.pick_node("aaa"), Some("aaaa"));
		assert_eq!(ring.pick_node("aaaaa"), Some("aa"));
	}

	#[test]
	fn test_optional_hash_function() {
		let default_ring: HashRing = HashRing::from(None);
		let mut crc_ring = default_ring.clone();
		crc_ring.add_node(["n"]);
		assert_eq!(crc_ring.positions(), &[crc32_ieee(b"n")]);

		let mut stub: HashRing = HashRing::from(Some(stub_hash as HashFunc));
		stub.add_node(["B"]);
		assert_eq!(stub.positions(), &[20]);
	}
}
