use std::sync::{Arc, RwLock};
use tarpc::{
	context,
	tokio_serde::formats::Bincode,
	server::Channel
};
use futures::{future, prelude::*};
use log::{info, warn, debug};
use super::{
	ring::*,
	config::*,
	error::*
};
use crate::{rpc::*, server::ServerManager};

/// Serves a single hash ring over RPC
#[derive(Clone)]
pub struct RouterServer {
	addr: String,
	config: Config,
	// HashRing itself is not synchronized
	ring: Arc<RwLock<HashRing>>
}

impl RouterServer {
	pub fn new(addr: &str, config: Config) -> Self {
		let mut ring = HashRing::with_hash_function(config.hash_algorithm.hash_function());
		ring.add_node(&config.initial_nodes);

		RouterServer {
			addr: addr.to_string(),
			config: config,
			ring: Arc::new(RwLock::new(ring))
		}
	}

	pub fn is_empty(&self) -> bool {
		self.ring.read().unwrap().is_empty()
	}

	pub fn members(&self) -> Vec<RingMember> {
		self.ring.read().unwrap().members()
	}

	pub fn add_node(&self, nodes: Vec<String>) {
		let mut ring = self.ring.write().unwrap();
		ring.add_node(&nodes);
		debug!("{}: ring has {} positions", self.addr, ring.len());
	}

	pub fn pick_node(&self, key: &str) -> Option<String> {
		let ring = self.ring.read().unwrap();
		let node = ring.pick_node(key).map(String::from);
		if node.is_none() {
			warn!("{}: no node for key {:?}, ring is empty", self.addr, key);
		}
		node
	}

	/// Start the server
	/// Returns once the listener is bound
	pub async fn start(&self) -> RouterResult<ServerManager> {
		// channel used to shutdown (true means shutdown)
		let (tx, mut rx) = tokio::sync::watch::channel(false);

		let mut listener = tarpc::serde_transport::tcp::listen(&self.addr, Bincode::default).await?;
		let local_addr = listener.local_addr();
		let server = self.clone();
		// Listen for rpc call
		let handle = tokio::spawn(async move {
			listener.config_mut().max_frame_length(usize::MAX);
			let listener_fut = listener
				.filter_map(|r| future::ready(r.ok()))
				.map(tarpc::server::BaseChannel::with_defaults)
				.map(|channel| async {
					// Clone a new server to share the ring in Arc
					channel.execute(server.clone().serve()).await;
				})
				.buffer_unordered(server.config.max_connections as usize)
				.for_each(|_| async {});

			tokio::select! {
				_ = listener_fut => {
					warn!("{}: listener terminated", server.addr);
				},
				_ = rx.changed() => {
					debug!("{}: listener stopped gracefully", server.addr);
				}
			};
		});

		info!(
			"{}: listening at {} with {} hashing",
			self.addr,
			local_addr,
			self.config.hash_algorithm
		);
		Ok(ServerManager {
			addr: local_addr,
			handle: handle,
			tx: tx
		})
	}
}

#[tarpc::server]
impl RouterService for RouterServer {
	async fn is_empty_rpc(self, _: context::Context) -> bool {
		self.is_empty()
	}

	async fn members_rpc(self, _: context::Context) -> Vec<RingMember> {
		self.members()
	}

	async fn add_node_rpc(self, _: context::Context, nodes: Vec<String>) {
		self.add_node(nodes)
	}

	async fn pick_node_rpc(self, _: context::Context, key: String) -> Option<String> {
		self.pick_node(&key)
	}
}
