//! ethlook - Interactive transaction and account lookup for EVM chains
//!
//! Reads a transaction hash or address from a prompt, queries a remote node
//! over JSON-RPC, and prints the result.

pub mod config;
pub mod rpc;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use rpc::{AddressInfo, LookupError, RpcClient, TxInfo, TxStatus};
pub use search::LookupQuery;
