//! Error types for Genesis Distribution

use super::value_objects::{Address, OutPoint};
use thiserror::Error;

/// Configuration integrity failures.
///
/// Raised while building the distribution table. None of these are
/// recoverable: the node must not start with an inconsistent genesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// Supply does not split evenly across the distribution addresses
    #[error("Max coin supply {supply} is not divisible by distribution address count {total}")]
    IndivisibleSupply { supply: u64, total: u64 },

    /// Distribution address count is zero
    #[error("Distribution address count must be greater than zero")]
    NoAddresses,

    /// More addresses unlocked than exist
    #[error("Initial unlocked count {initial} exceeds distribution address count {total}")]
    UnlockedCountTooLarge { initial: u64, total: u64 },

    /// Literal address list disagrees with the configured count
    #[error("Address list has {actual} entries, expected {expected}")]
    AddressCountMismatch { expected: u64, actual: usize },

    /// Address string is malformed
    #[error("Invalid distribution address at index {index}: {source}")]
    InvalidAddress {
        index: usize,
        #[source]
        source: AddressError,
    },

    /// Same address listed twice
    #[error("Duplicate distribution address {address} at indices {first} and {second}")]
    DuplicateAddress {
        address: Address,
        first: usize,
        second: usize,
    },

    /// Droplet precision outside the representable range
    #[error("Max droplet precision {precision} exceeds {max}")]
    InvalidDropletPrecision { precision: u64, max: u64 },

    /// Supply does not fit in droplets
    #[error("Coin supply overflows droplet accounting")]
    SupplyOverflow,

    /// Unknown configuration profile name
    #[error("Unknown distribution profile: {0}")]
    UnknownProfile(String),

    /// Environment variable could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidEnvValue { key: String, value: String },

    /// Derived state broke a table or partition invariant
    #[error("Distribution invariant violated: {0}")]
    InvariantViolated(&'static str),
}

/// Malformed address string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address is empty")]
    Empty,

    #[error("Invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },
}

/// Outcome of the locked-spend rule that the ledger must reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockError {
    /// The transaction spends an output owned by a locked distribution address
    #[error("Transaction spends time-locked distribution funds: input {input_index} is owned by {address}")]
    SpendsLockedDistribution { input_index: usize, address: Address },

    /// The owner of an input could not be determined
    #[error("Cannot resolve owner of input {input_index}")]
    UnresolvableInput { input_index: usize },

    /// The owner lookup itself failed
    #[error("Owner lookup failed for input {input_index}: {source}")]
    OwnerLookupFailed {
        input_index: usize,
        #[source]
        source: ResolveError,
    },
}

impl LockError {
    /// True when the rejection is the locked-spend rule rather than bad input.
    pub fn is_locked_spend(&self) -> bool {
        matches!(self, Self::SpendsLockedDistribution { .. })
    }
}

/// Output owner lookup error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Output not found: {0:?}")]
    NotFound(OutPoint),

    #[error("Owner index unavailable: {0}")]
    Unavailable(String),
}

pub type DistributionResult<T> = Result<T, DistributionError>;

pub type LockResult<T> = Result<T, LockError>;
