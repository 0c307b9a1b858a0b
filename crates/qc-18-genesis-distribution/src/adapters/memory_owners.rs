use crate::domain::errors::ResolveError;
use crate::domain::value_objects::{Address, OutPoint};
use crate::ports::OutputOwnerResolver;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory owner index for unspent outputs.
///
/// Stands in for the ledger's UTXO set in tests and tooling.
pub struct InMemoryOutputOwners {
    owners: RwLock<HashMap<OutPoint, Option<Address>>>,
}

impl InMemoryOutputOwners {
    pub fn new() -> Self {
        Self {
            owners: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, outpoint: OutPoint, owner: Address) -> Result<(), ResolveError> {
        let mut owners = self.owners.write().map_err(|_| poisoned())?;
        owners.insert(outpoint, Some(owner));
        Ok(())
    }

    /// Record an output whose owner is unknown.
    pub fn insert_unowned(&self, outpoint: OutPoint) -> Result<(), ResolveError> {
        let mut owners = self.owners.write().map_err(|_| poisoned())?;
        owners.insert(outpoint, None);
        Ok(())
    }

    pub fn remove(&self, outpoint: &OutPoint) -> Result<(), ResolveError> {
        let mut owners = self.owners.write().map_err(|_| poisoned())?;
        owners.remove(outpoint);
        Ok(())
    }
}

impl Default for InMemoryOutputOwners {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputOwnerResolver for InMemoryOutputOwners {
    fn resolve_owner(&self, outpoint: &OutPoint) -> Result<Option<Address>, ResolveError> {
        let owners = self.owners.read().map_err(|_| poisoned())?;
        owners
            .get(outpoint)
            .cloned()
            .ok_or(ResolveError::NotFound(*outpoint))
    }
}

fn poisoned() -> ResolveError {
    ResolveError::Unavailable("owner index lock poisoned".to_string())
}
