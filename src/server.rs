use std::net::SocketAddr;
use crate::core::error::*;

pub struct ServerManager {
	/// Address the listener is bound to
	pub addr: SocketAddr,
	pub handle: tokio::task::JoinHandle<()>,
	pub tx: tokio::sync::watch::Sender<bool>
}

impl ServerManager {
	/// Wait for the server to terminate
	pub async fn wait(self) -> RouterResult<()> {
		self.handle.await?;
		Ok(())
	}

	/// Stop the server gracefully
	pub async fn stop(self) -> RouterResult<()> {
		self.tx.send(true)?;
		self.wait().await
	}
}
