use alloy::{
    consensus::Transaction as TxTrait,
    network::TransactionResponse,
    primitives::{Address, Bytes, U256},
};

// ============================================================================
// Data Types
// ============================================================================

/// Read-only projection of a transaction as reported by the remote node
#[derive(Debug, Clone)]
pub struct TxInfo {
    pub hash: String,
    pub nonce: u64,
    pub block_hash: Option<String>,
    pub block_number: Option<u64>,
    pub tx_index: Option<u64>,
    pub from: String,
    pub to: Option<String>,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: Option<u128>,
    pub input_data: Bytes,
    pub pending: bool,
}

impl TxInfo {
    pub fn from_tx(tx: &alloy::rpc::types::Transaction) -> Self {
        // A transaction with no containing block hash has not been mined yet
        let block_hash = tx.block_hash();

        Self {
            hash: format!("{:?}", tx.tx_hash()),
            nonce: tx.nonce(),
            block_hash: block_hash.map(|h| format!("{h:?}")),
            block_number: tx.block_number(),
            tx_index: tx.transaction_index(),
            from: format!("{:?}", tx.from()),
            to: tx.to().map(|a| format!("{a:?}")),
            value: tx.value(),
            gas_limit: tx.gas_limit(),
            gas_price: <_ as TransactionResponse>::gas_price(tx),
            input_data: tx.input().clone(),
            pending: block_hash.is_none(),
        }
    }
}

/// Receipt outcome for a transaction, or Pending when no receipt exists yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Success,
    Failed,
}

impl TxStatus {
    pub fn from_receipt_status(success: bool) -> Self {
        if success {
            TxStatus::Success
        } else {
            TxStatus::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Pending => "Pending",
            TxStatus::Success => "Success",
            TxStatus::Failed => "Failed",
        }
    }
}

/// Point-in-time account snapshot: balance at latest state, pending nonce
#[derive(Debug, Clone)]
pub struct AddressInfo {
    pub address: Address,
    pub balance: U256,
    pub nonce: u64,
}
