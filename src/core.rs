pub mod ring;
pub mod hash;
pub mod config;
pub mod router;
pub mod error;

pub use ring::*;
pub use hash::*;
pub use config::*;
pub use router::*;
pub use error::*;
