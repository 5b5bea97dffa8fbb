mod types;

pub use types::*;

use alloy::{
    network::Ethereum,
    primitives::{Address, TxHash},
    providers::{Provider, ProviderBuilder, RootProvider},
    transports::TransportError,
};
use thiserror::Error;

type HttpProvider = RootProvider<Ethereum>;

/// Failures surfaced by the lookup client. All of them are fatal to the
/// caller: there is no retry and no distinction in handling between a
/// transport failure and a missing record.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid RPC endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("RPC call {call} failed")]
    Rpc {
        call: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("transaction {0} not found")]
    TxNotFound(TxHash),

    #[error("no receipt for transaction {0}")]
    ReceiptNotFound(TxHash),
}

/// Thin read-only JSON-RPC client. One connection per process, reused by
/// every query; every call blocks the loop until the node answers.
pub struct RpcClient {
    provider: HttpProvider,
}

impl RpcClient {
    pub fn new(rpc_url: &str) -> Result<Self, LookupError> {
        let url = rpc_url
            .parse()
            .map_err(|_| LookupError::InvalidEndpoint(rpc_url.to_string()))?;
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_http(url);

        Ok(Self { provider })
    }

    /// Fetch a transaction by hash. A null response from the node is an
    /// error, same as a transport failure.
    pub async fn get_transaction(&self, hash: TxHash) -> Result<TxInfo, LookupError> {
        let tx = self
            .provider
            .get_transaction_by_hash(hash)
            .await
            .map_err(|source| LookupError::Rpc {
                call: "eth_getTransactionByHash",
                source,
            })?
            .ok_or(LookupError::TxNotFound(hash))?;

        Ok(TxInfo::from_tx(&tx))
    }

    /// Fetch the receipt for a mined transaction and map its status code.
    /// Callers skip this entirely for pending transactions.
    pub async fn receipt_status(&self, hash: TxHash) -> Result<TxStatus, LookupError> {
        let receipt = self
            .provider
            .get_transaction_receipt(hash)
            .await
            .map_err(|source| LookupError::Rpc {
                call: "eth_getTransactionReceipt",
                source,
            })?
            .ok_or(LookupError::ReceiptNotFound(hash))?;

        Ok(TxStatus::from_receipt_status(receipt.status()))
    }

    /// Fetch balance at latest state and the pending nonce for an address.
    /// The two reads are independent point-in-time views.
    pub async fn get_address(&self, address: Address) -> Result<AddressInfo, LookupError> {
        let balance = self
            .provider
            .get_balance(address)
            .await
            .map_err(|source| LookupError::Rpc {
                call: "eth_getBalance",
                source,
            })?;

        let nonce = self
            .provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(|source| LookupError::Rpc {
                call: "eth_getTransactionCount",
                source,
            })?;

        Ok(AddressInfo {
            address,
            balance,
            nonce,
        })
    }
}
