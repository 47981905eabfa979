use consistent_hash_router::core::{
	config::*,
	HashAlgorithm,
	RouterServer
};
use clap::Parser;

#[derive(Parser)]
struct Args {
	/// Local addr to bind (<host>:<port>)
	addr: String,

	/// Node to place on the ring at startup (repeatable)
	#[clap(short, long)]
	node: Vec<String>,

	/// Hash function for ring positions (crc32 or sip)
	#[clap(long, default_value = "crc32")]
	hash: HashAlgorithm,

	/// Max number of concurrent connections
	#[clap(long, default_value = "16")]
	max_connections: u64
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let config = Config {
		hash_algorithm: args.hash,
		initial_nodes: args.node,
		max_connections: args.max_connections
	};
	let s = RouterServer::new(&args.addr, config);
	let manager = s.start().await?;
	manager.wait().await?;
	Ok(())
}
