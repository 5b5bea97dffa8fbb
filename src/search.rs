use alloy::primitives::{hex, Address, TxHash};

/// Represents the type of lookup a line of input maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupQuery {
    /// Transaction hash (exactly 32 bytes of hex, optional 0x prefix)
    TxHash(TxHash),
    /// Account or contract address, coerced from whatever the input was
    Address(Address),
}

impl LookupQuery {
    /// Classify a line of input. A syntactically valid 32-byte hex string is
    /// always a transaction hash; everything else is treated as an address.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if let Ok(hash) = trimmed.parse::<TxHash>() {
            return Self::TxHash(hash);
        }

        Self::Address(coerce_address(trimmed))
    }
}

/// Coerce arbitrary input into a 20-byte address without validation:
/// strip an optional 0x prefix, pad odd-length hex on the left, and keep the
/// last 20 decoded bytes (left-padded with zeros when shorter). Undecodable
/// input collapses to the zero address.
fn coerce_address(input: &str) -> Address {
    let hex_part = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    let padded;
    let hex_part = if hex_part.len() % 2 == 1 {
        padded = format!("0{hex_part}");
        padded.as_str()
    } else {
        hex_part
    };

    let bytes = hex::decode(hex_part).unwrap_or_default();

    if bytes.len() >= 20 {
        Address::from_slice(&bytes[bytes.len() - 20..])
    } else {
        Address::left_padding_from(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tx_hash() {
        let hash = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
        assert!(matches!(LookupQuery::parse(hash), LookupQuery::TxHash(_)));
    }

    #[test]
    fn test_parse_tx_hash_without_prefix() {
        let hash = "5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
        assert!(matches!(LookupQuery::parse(hash), LookupQuery::TxHash(_)));
    }

    #[test]
    fn test_parse_tx_hash_trims_whitespace() {
        let hash = "  0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060\n";
        assert!(matches!(LookupQuery::parse(hash), LookupQuery::TxHash(_)));
    }

    #[test]
    fn test_valid_hash_is_never_an_address() {
        // 64 hex chars always dispatches to the transaction path
        let hash = format!("0x{}", "ab".repeat(32));
        assert!(matches!(LookupQuery::parse(&hash), LookupQuery::TxHash(_)));
    }

    #[test]
    fn test_parse_address() {
        let addr = "0x742d35Cc6634C0532925a3b844Bc9e7595f8fE31";
        let expected: Address = addr.parse().unwrap();
        assert_eq!(LookupQuery::parse(addr), LookupQuery::Address(expected));
    }

    #[test]
    fn test_short_hex_is_zero_padded() {
        let parsed = LookupQuery::parse("0x1234");
        let mut bytes = [0u8; 20];
        bytes[18] = 0x12;
        bytes[19] = 0x34;
        assert_eq!(parsed, LookupQuery::Address(Address::from(bytes)));
    }

    #[test]
    fn test_odd_length_hex_gets_leading_nibble() {
        let parsed = LookupQuery::parse("0xabc");
        let mut bytes = [0u8; 20];
        bytes[18] = 0x0a;
        bytes[19] = 0xbc;
        assert_eq!(parsed, LookupQuery::Address(Address::from(bytes)));
    }

    #[test]
    fn test_malformed_input_coerces_to_zero_address() {
        assert_eq!(
            LookupQuery::parse("not hex at all"),
            LookupQuery::Address(Address::ZERO)
        );
        assert_eq!(LookupQuery::parse(""), LookupQuery::Address(Address::ZERO));
    }

    #[test]
    fn test_overlong_hex_keeps_last_twenty_bytes() {
        // 63 hex chars: not a hash, so the address path truncates from the left
        let input = format!("0x{}", "1".repeat(63));
        let LookupQuery::Address(addr) = LookupQuery::parse(&input) else {
            panic!("Expected Address variant");
        };
        assert_eq!(addr.as_slice(), &[0x11u8; 20]);
    }
}
