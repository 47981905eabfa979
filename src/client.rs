use crate::{
	core::error::*,
	rpc::RouterServiceClient
};
use tarpc::tokio_serde::formats::Bincode;

pub async fn setup_client(addr: &str) -> RouterResult<RouterServiceClient> {
	let transport = tarpc::serde_transport::tcp::connect(addr, Bincode::default).await?;
	Ok(RouterServiceClient::new(tarpc::client::Config::default(), transport).spawn())
}
