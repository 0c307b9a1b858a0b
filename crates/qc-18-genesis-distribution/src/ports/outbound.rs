//! Outbound Ports (Driven Ports / SPI)

use crate::config::DistributionConfig;
use crate::domain::errors::ResolveError;
use crate::domain::value_objects::{Address, ChainPoint, OutPoint};

/// Owner lookup for unspent outputs.
///
/// Implemented by the ledger's UTXO set. `Ok(None)` means the output exists
/// but its owner cannot be determined.
pub trait OutputOwnerResolver: Send + Sync {
    fn resolve_owner(&self, outpoint: &OutPoint) -> Result<Option<Address>, ResolveError>;
}

/// Number of distribution addresses unlocked at a given chain point.
///
/// Rate/interval driven unlocking is not defined yet. Implementations decide
/// the count; the partition and the lock check stay unchanged.
pub trait UnlockPolicy: Send + Sync {
    fn unlocked_count(&self, config: &DistributionConfig, at: ChainPoint) -> u64;
}
