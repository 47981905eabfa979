use std::{
	collections::hash_map::DefaultHasher,
	fmt,
	hash::{Hash, Hasher},
	str::FromStr
};
use super::error::RouterError;

/// Hash strategy injected into a ring: bytes to a 32-bit ring position.
/// Must be pure, otherwise lookups are no longer deterministic.
pub type HashFunc = fn(&[u8]) -> u32;

/// CRC32 checksum with the IEEE polynomial (the default strategy)
pub fn crc32_ieee(data: &[u8]) -> u32 {
	crc32fast::hash(data)
}

/// SipHash (std DefaultHasher with fixed keys) truncated to 32 bits
pub fn sip_hash32(data: &[u8]) -> u32 {
	let mut hasher = DefaultHasher::new();
	data.hash(&mut hasher);
	hasher.finish() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
	Crc32,
	Sip
}

impl HashAlgorithm {
	pub fn hash_function(&self) -> HashFunc {
		match self {
			HashAlgorithm::Crc32 => crc32_ieee,
			HashAlgorithm::Sip => sip_hash32
		}
	}
}

impl Default for HashAlgorithm {
	fn default() -> Self {
		HashAlgorithm::Crc32
	}
}

impl fmt::Display for HashAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HashAlgorithm::Crc32 => write!(f, "crc32"),
			HashAlgorithm::Sip => write!(f, "sip")
		}
	}
}

impl FromStr for HashAlgorithm {
	type Err = RouterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"crc32" => Ok(HashAlgorithm::Crc32),
			"sip" => Ok(HashAlgorithm::Sip),
			_ => Err(RouterError::UnknownHashAlgorithm(s.to_string()))
		}
	}
}
