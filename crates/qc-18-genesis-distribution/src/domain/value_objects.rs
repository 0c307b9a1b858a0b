//! Value objects for Genesis Distribution

use super::errors::AddressError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Whole coin amount.
pub type Coins = u64;

/// Sub-coin amount (1 coin = 1_000_000 droplets).
pub type Droplets = u64;

/// A 32-byte transaction hash.
pub type TxHash = [u8; 32];

const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base58 string form of a public-key-derived address.
///
/// Only the character set is checked; checksum verification belongs to the
/// wallet and signature layers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse an address string.
    pub fn parse(value: impl Into<String>) -> Result<Self, AddressError> {
        let value = value.into();
        if value.is_empty() {
            return Err(AddressError::Empty);
        }
        if let Some((position, character)) = value
            .char_indices()
            .find(|(_, c)| !c.is_ascii() || !BASE58_ALPHABET.contains(&(*c as u8)))
        {
            return Err(AddressError::InvalidCharacter {
                position,
                character,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashSet<Address>` be probed with a `&str`.
impl Borrow<str> for Address {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Reference to a specific output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction hash containing the output
    pub tx_hash: TxHash,
    /// Index of the output in the transaction
    pub output_index: u32,
}

impl OutPoint {
    pub const fn new(tx_hash: TxHash, output_index: u32) -> Self {
        Self {
            tx_hash,
            output_index,
        }
    }
}

/// An unspent output consumed by a transaction input.
///
/// `owner` is `None` when the ledger could not resolve who holds the output.
/// Such inputs are malformed and fail validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpentOutput {
    pub outpoint: OutPoint,
    pub owner: Option<Address>,
}

impl SpentOutput {
    pub fn new(outpoint: OutPoint, owner: Address) -> Self {
        Self {
            outpoint,
            owner: Some(owner),
        }
    }

    pub fn unresolved(outpoint: OutPoint) -> Self {
        Self {
            outpoint,
            owner: None,
        }
    }
}

/// Position on the chain an unlock decision is evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainPoint {
    /// Block height
    pub height: u64,
    /// Unix timestamp in seconds
    pub timestamp: u64,
}

impl ChainPoint {
    pub const fn new(height: u64, timestamp: u64) -> Self {
        Self { height, timestamp }
    }

    pub const fn genesis() -> Self {
        Self {
            height: 0,
            timestamp: 0,
        }
    }
}
