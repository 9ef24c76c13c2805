//! Test-chain accounts for the local Hardhat node.
//!
//! Keys are local-emulation credentials only. They are written into
//! `.env` and `hardhat.config.js` of the generated project.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of accounts generated per project
pub const ACCOUNT_COUNT: usize = 10;

/// 1000 ETH in wei
pub const DEFAULT_BALANCE: &str = "1000000000000000000000";

/// secp256k1 group order, big-endian
const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAccount {
    /// `0x`-prefixed, 64 lowercase hex digits
    pub private_key: String,
    /// Starting balance in wei, as a decimal string
    pub balance: String,
}

impl TestAccount {
    /// Generate an account with a fresh random key and the default balance
    pub fn random() -> Self {
        Self {
            private_key: random_private_key(),
            balance: DEFAULT_BALANCE.to_string(),
        }
    }
}

/// Generate the accounts for one project
pub fn generate() -> Vec<TestAccount> {
    (0..ACCOUNT_COUNT).map(|_| TestAccount::random()).collect()
}

/// Random scalar in `[1, n)`, rejection-sampled from the OS RNG.
fn random_private_key() -> String {
    let mut bytes = [0u8; 32];
    loop {
        OsRng.fill_bytes(&mut bytes);
        if is_valid_scalar(&bytes) {
            return format!("0x{}", hex::encode(bytes));
        }
    }
}

fn is_valid_scalar(bytes: &[u8; 32]) -> bool {
    bytes.iter().any(|b| *b != 0) && bytes < &CURVE_ORDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_ten_distinct_accounts() {
        let accounts = generate();
        assert_eq!(accounts.len(), ACCOUNT_COUNT);

        let mut keys: Vec<&str> = accounts.iter().map(|a| a.private_key.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ACCOUNT_COUNT);
    }

    #[test]
    fn test_key_format() {
        let account = TestAccount::random();
        let hex_part = account.private_key.strip_prefix("0x").unwrap();
        assert_eq!(hex_part.len(), 64);
        assert!(hex_part
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(account.balance, DEFAULT_BALANCE);
    }

    #[test]
    fn test_scalar_bounds() {
        assert!(!is_valid_scalar(&[0u8; 32]));
        assert!(!is_valid_scalar(&CURVE_ORDER));
        assert!(!is_valid_scalar(&[0xff; 32]));

        let mut below = CURVE_ORDER;
        below[31] -= 1;
        assert!(is_valid_scalar(&below));

        let mut one = [0u8; 32];
        one[31] = 1;
        assert!(is_valid_scalar(&one));
    }

    #[test]
    fn test_serializes_camel_case() {
        let account = TestAccount {
            private_key: "0x01".to_string(),
            balance: "1".to_string(),
        };
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"privateKey":"0x01","balance":"1"}"#);
    }
}
