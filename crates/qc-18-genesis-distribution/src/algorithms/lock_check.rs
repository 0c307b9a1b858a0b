//! Locked Spend Detection
//!
//! Membership test of transaction input owners against the locked suffix.

use crate::domain::errors::{LockError, LockResult};
use crate::domain::value_objects::{Address, SpentOutput};
use std::collections::HashSet;

/// Lookup set over the locked addresses.
///
/// Built once from a partition and never modified, so it can be shared
/// between validator threads without locking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LockedSet {
    addresses: HashSet<Address>,
}

impl LockedSet {
    pub fn new(locked: &[Address]) -> Self {
        Self {
            addresses: locked.iter().cloned().collect(),
        }
    }

    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Find the first input that spends a locked output.
///
/// Every input must carry a resolved owner. An unresolved input fails the
/// check even if a locked input comes earlier, so the outcome does not depend
/// on input order.
pub fn find_locked_input<'a>(
    locked: &LockedSet,
    inputs: &'a [SpentOutput],
) -> LockResult<Option<(usize, &'a Address)>> {
    if let Some(input_index) = inputs.iter().position(|input| input.owner.is_none()) {
        return Err(LockError::UnresolvableInput { input_index });
    }

    if locked.is_empty() {
        return Ok(None);
    }

    Ok(inputs
        .iter()
        .enumerate()
        .filter_map(|(index, input)| input.owner.as_ref().map(|owner| (index, owner)))
        .find(|(_, owner)| locked.contains(owner.as_str())))
}
