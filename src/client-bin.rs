use consistent_hash_router::{
	client::setup_client,
	rpc::RouterServiceClient
};
use tarpc::context;
use clap::Parser;
use inquire::{Text, CustomUserError};
use anyhow::anyhow;

#[derive(Parser)]
struct Args {
	/// Server addr to connect to (<host>:<port>)
	addr: String,
}

const COMMANDS: [&str; 4] = [
	"add",
	"empty",
	"members",
	"pick"
];

fn suggest_command(v: &str) -> Result<Vec<String>, CustomUserError> {
	let mut result = Vec::new();
	for command in COMMANDS {
		if v.len() > 0 && command.starts_with(v) {
			result.push(command.to_string());
		}
	}
	Ok(result)
}

fn complete_command(v: &str) -> Result<Option<String>, CustomUserError> {
	let result = suggest_command(v)?;
	let command = if result.len() > 0 {
		Some(result[0].clone() + " ")
	}
	else {
		None
	};
	Ok(command)
}

async fn execute_command(client: &RouterServiceClient, command: &str) -> anyhow::Result<()> {
	// execute command
	let words: Vec<_> = command.split_whitespace().collect();
	if words.len() == 0 {
		return Err(anyhow!("invalid command"));
	}

	let ctx = context::current();
	match words[0] {
		"pick" => {
			// no key means the empty key
			if words.len() > 2 {
				return Err(anyhow!("pick: invalid number of arguments"));
			}
			let key = words.get(1).copied().unwrap_or("");
			match client.pick_node_rpc(ctx, key.to_string()).await? {
				Some(node) => println!("{}", node),
				None => return Err(anyhow!("pick: ring is empty"))
			};
		},
		"add" => {
			if words.len() < 2 {
				return Err(anyhow!("add: no node given"));
			}
			let nodes = words[1..].iter().map(|w| w.to_string()).collect();
			client.add_node_rpc(ctx, nodes).await?;
		},
		"members" => {
			for member in client.members_rpc(ctx).await? {
				println!("{}", member);
			}
		},
		"empty" => {
			println!("{}", client.is_empty_rpc(ctx).await?);
		},
		_ => {
			return Err(anyhow!("invalid command"));
		}
	};
	Ok(())
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();
	let client = setup_client(&args.addr).await?;

	loop {
		let command = Text::new("")
			.with_suggester(&suggest_command)
			.with_completer(&complete_command)
			.prompt()?;

		match execute_command(&client, &command).await {
			Ok(_) => (),
			Err(e) => println!("Error: {}", e)
		};
	}
}
