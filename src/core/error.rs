use thiserror::Error;
use std::result::Result;

#[derive(Error, Debug)]
pub enum RouterError {
	#[error("Unknown hash algorithm: {0}")]
	UnknownHashAlgorithm(String),
	#[error("RPC error")]
	RpcError(#[from] tarpc::client::RpcError),
	#[error("IO error")]
	IoError(#[from] std::io::Error),
	#[error("Server already shut down")]
	ShutdownError(#[from] tokio::sync::watch::error::SendError<bool>),
	#[error("Server task failed")]
	JoinError(#[from] tokio::task::JoinError)
}

pub type RouterResult<T> = Result<T, RouterError>;
