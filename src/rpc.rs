use crate::core::RingMember;

#[tarpc::service]
pub trait RouterService {
	// Ring state
	async fn is_empty_rpc() -> bool;
	async fn members_rpc() -> Vec<RingMember>;

	// Place nodes on the ring
	async fn add_node_rpc(nodes: Vec<String>);

	// Find the node owning a key (None if the ring is empty)
	async fn pick_node_rpc(key: String) -> Option<String>;
}
