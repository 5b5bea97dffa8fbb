use crate::rpc::{AddressInfo, TxInfo, TxStatus};
use std::io::{self, BufRead, Write};

/// Placeholder for block fields a pending transaction does not have yet
const PENDING_FIELD: &str = "(pending)";

/// Write a prompt to stdout and read one trimmed line from stdin.
/// EOF reads as an empty line.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Field lines for a transaction, in display order
pub fn tx_lines(info: &TxInfo) -> Vec<String> {
    vec![
        format!("Hash: {}", info.hash),
        format!("Nonce: {}", info.nonce),
        format!(
            "Block Hash: {}",
            info.block_hash.as_deref().unwrap_or(PENDING_FIELD)
        ),
        format!(
            "Block Number: {}",
            info.block_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| PENDING_FIELD.to_string())
        ),
        format!(
            "Transaction Index: {}",
            info.tx_index
                .map(|i| i.to_string())
                .unwrap_or_else(|| PENDING_FIELD.to_string())
        ),
        format!("From: {}", info.from),
        format!(
            "To: {}",
            info.to.as_deref().unwrap_or("(contract creation)")
        ),
        format!("Value: {}", info.value),
        format!("Gas: {}", info.gas_limit),
        format!(
            "Gas Price: {}",
            info.gas_price
                .map(|p| p.to_string())
                .unwrap_or_else(|| PENDING_FIELD.to_string())
        ),
        format!("Input: {}", info.input_data),
        format!("Pending: {}", info.pending),
    ]
}

pub fn status_line(status: TxStatus) -> String {
    format!("Status: {}", status.as_str())
}

/// Field lines for an account snapshot
pub fn address_lines(info: &AddressInfo) -> Vec<String> {
    vec![
        format!("Address: {:?}", info.address),
        format!("Balance: {}", info.balance),
        format!("Nonce: {}", info.nonce),
    ]
}

/// Only the exact literal "y" (after trimming) continues the loop
pub fn wants_another_search(input: &str) -> bool {
    input.trim() == "y"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        assert_eq!(status_line(TxStatus::Success), "Status: Success");
        assert_eq!(status_line(TxStatus::Failed), "Status: Failed");
        assert_eq!(status_line(TxStatus::Pending), "Status: Pending");
    }

    #[test]
    fn test_wants_another_search_exact_y_only() {
        assert!(wants_another_search("y"));
        assert!(wants_another_search(" y\n"));
        assert!(!wants_another_search("n"));
        assert!(!wants_another_search(""));
        assert!(!wants_another_search("yes"));
        assert!(!wants_another_search("Y"));
    }
}
