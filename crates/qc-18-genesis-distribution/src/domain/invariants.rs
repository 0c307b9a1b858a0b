//! Domain invariants for Genesis Distribution

use super::entities::{DistributionTable, UnlockState};
use super::value_objects::Address;
use std::collections::HashSet;

/// INVARIANT-1: Supply Conservation
/// Balances add up to the max supply with no rounding loss.
pub fn invariant_supply_conserved(table: &DistributionTable) -> bool {
    table.total_balance() == Some(table.max_coin_supply())
}

/// INVARIANT-2: Unique Addresses
/// No address appears twice and every index matches its position.
pub fn invariant_unique_entries(table: &DistributionTable) -> bool {
    let mut seen: HashSet<&Address> = HashSet::with_capacity(table.len());

    table
        .entries()
        .iter()
        .enumerate()
        .all(|(position, entry)| entry.index == position && seen.insert(&entry.address))
}

/// INVARIANT-3: Disjoint Partition
/// No address is both unlocked and locked.
pub fn invariant_partition_disjoint(state: &UnlockState) -> bool {
    let unlocked: HashSet<&Address> = state.unlocked.iter().collect();
    !state.locked.iter().any(|a| unlocked.contains(a))
}

/// INVARIANT-4: Complete Prefix Partition
/// `unlocked ++ locked` reproduces the table in index order.
pub fn invariant_partition_complete(state: &UnlockState, table: &DistributionTable) -> bool {
    state.total() == table.len()
        && state
            .unlocked
            .iter()
            .chain(state.locked.iter())
            .zip(table.entries())
            .all(|(address, entry)| *address == entry.address)
}
