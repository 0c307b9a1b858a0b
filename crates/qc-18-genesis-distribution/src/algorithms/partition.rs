//! Unlock Partition
//!
//! Splits the distribution table into an unlocked prefix and a locked suffix.
//! The split depends only on the table and the unlocked count, so the same
//! function serves the static genesis partition and any later unlock policy.

use crate::domain::entities::{DistributionTable, UnlockState};

/// Index at which the locked suffix starts.
///
/// Counts beyond the table length are clamped to the table length.
pub fn split_point(table_len: usize, unlocked_count: u64) -> usize {
    usize::try_from(unlocked_count).map_or(table_len, |count| count.min(table_len))
}

/// Partition the table into the first `unlocked_count` addresses and the rest.
pub fn partition(table: &DistributionTable, unlocked_count: u64) -> UnlockState {
    let addresses = table.all_addresses();
    let split = split_point(addresses.len(), unlocked_count);

    let mut unlocked = addresses;
    let locked = unlocked.split_off(split);

    UnlockState { unlocked, locked }
}
