//! Core entities for Genesis Distribution

use super::errors::{DistributionError, DistributionResult};
use super::value_objects::{Address, Coins, Droplets};
use crate::config::DistributionConfig;
use crate::genesis::DROPLETS_PER_COIN;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the genesis allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// 0-based position in the table
    pub index: usize,
    /// Owning address
    pub address: Address,
    /// Coins allocated at genesis
    pub balance: Coins,
}

/// The fixed genesis allocation.
///
/// Immutable once built. Every entry holds the same balance and the entry
/// order decides which addresses fall in the unlocked prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionTable {
    entries: Vec<DistributionEntry>,
    positions: HashMap<Address, usize>,
    max_coin_supply: Coins,
    initial_balance: Coins,
}

impl DistributionTable {
    /// Build the table from a configuration.
    ///
    /// Fails if the supply does not split evenly, if the address list does not
    /// match the configured count, or if any address is malformed or repeated.
    pub fn new(config: &DistributionConfig) -> DistributionResult<Self> {
        config.validate()?;

        let initial_balance = config.max_coin_supply / config.addresses_total;
        let mut entries = Vec::with_capacity(config.addresses.len());
        let mut positions = HashMap::with_capacity(config.addresses.len());

        for (index, raw) in config.addresses.iter().enumerate() {
            let address = Address::parse(raw.as_str())
                .map_err(|source| DistributionError::InvalidAddress { index, source })?;

            if let Some(&first) = positions.get(&address) {
                return Err(DistributionError::DuplicateAddress {
                    address,
                    first,
                    second: index,
                });
            }

            positions.insert(address.clone(), index);
            entries.push(DistributionEntry {
                index,
                address,
                balance: initial_balance,
            });
        }

        Ok(Self {
            entries,
            positions,
            max_coin_supply: config.max_coin_supply,
            initial_balance,
        })
    }

    /// All addresses in index order. Returns a fresh copy.
    pub fn all_addresses(&self) -> Vec<Address> {
        self.entries.iter().map(|e| e.address.clone()).collect()
    }

    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DistributionEntry> {
        self.entries.get(index)
    }

    /// Table index of an address, if it is a distribution address.
    pub fn position(&self, address: &str) -> Option<usize> {
        self.positions.get(address).copied()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.positions.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Coins per distribution address.
    pub fn initial_balance(&self) -> Coins {
        self.initial_balance
    }

    pub fn max_coin_supply(&self) -> Coins {
        self.max_coin_supply
    }

    /// Sum of all balances, `None` on overflow.
    pub fn total_balance(&self) -> Option<Coins> {
        self.entries
            .iter()
            .try_fold(0u64, |acc, e| acc.checked_add(e.balance))
    }

    /// Per-address genesis output in droplets.
    pub fn initial_balance_droplets(&self) -> Droplets {
        // config validation guarantees the supply fits in droplets
        self.initial_balance.saturating_mul(DROPLETS_PER_COIN)
    }

    /// Whole genesis output in droplets.
    pub fn genesis_coin_volume(&self) -> Droplets {
        self.max_coin_supply.saturating_mul(DROPLETS_PER_COIN)
    }
}

/// Split of the table into spendable and locked addresses.
///
/// `unlocked` is always a prefix of the table and `locked` the matching suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockState {
    pub unlocked: Vec<Address>,
    pub locked: Vec<Address>,
}

impl UnlockState {
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn locked_count(&self) -> usize {
        self.locked.len()
    }

    pub fn total(&self) -> usize {
        self.unlocked.len() + self.locked.len()
    }

    pub fn is_fully_unlocked(&self) -> bool {
        self.locked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DistributionProfile;

    fn small_config(supply: u64, addresses: &[&str]) -> DistributionConfig {
        DistributionConfig {
            max_coin_supply: supply,
            addresses_total: addresses.len() as u64,
            initial_unlocked_count: 0,
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
            ..DistributionConfig::default()
        }
    }

    #[test]
    fn test_table_from_default_profile() {
        let table = DistributionTable::new(&DistributionProfile::Scheduled.config()).unwrap();
        assert_eq!(table.len(), 100);
        assert_eq!(table.initial_balance(), 3_000_000);
        assert_eq!(table.total_balance(), Some(300_000_000));
        assert_eq!(
            table.get(0).map(|e| e.address.as_str()),
            Some("4EmJ5dfx3wsHwWKsMTfQ31p5uYJfJdkohh")
        );
        assert_eq!(
            table.get(99).map(|e| e.address.as_str()),
            Some("uN7JuRyBtbMvRfP26Ui3pnexch8WgoGfdf")
        );
        assert!(table.get(100).is_none());
    }

    #[test]
    fn test_indices_match_positions() {
        let table = DistributionTable::new(&DistributionConfig::default()).unwrap();
        for entry in table.entries() {
            assert_eq!(table.position(entry.address.as_str()), Some(entry.index));
        }
        assert_eq!(table.position("1111111111"), None);
    }

    #[test]
    fn test_all_addresses_is_a_copy() {
        let table = DistributionTable::new(&DistributionConfig::default()).unwrap();
        let mut first = table.all_addresses();
        first.clear();
        assert_eq!(table.all_addresses().len(), 100);
    }

    #[test]
    fn test_droplet_accounting() {
        let table = DistributionTable::new(&DistributionConfig::default()).unwrap();
        assert_eq!(table.initial_balance_droplets(), 3_000_000_000_000);
        assert_eq!(table.genesis_coin_volume(), 300_000_000_000_000);
    }

    #[test]
    fn test_indivisible_supply_fails() {
        let mut config = DistributionConfig::default();
        config.max_coin_supply = 300_000_001;
        assert!(matches!(
            DistributionTable::new(&config),
            Err(DistributionError::IndivisibleSupply { .. })
        ));
    }

    #[test]
    fn test_duplicate_address_fails() {
        let config = small_config(30, &["abc", "def", "abc"]);
        let err = DistributionTable::new(&config).unwrap_err();
        assert!(matches!(
            err,
            DistributionError::DuplicateAddress {
                first: 0,
                second: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_address_fails() {
        let config = small_config(20, &["abc", "0OIl"]);
        assert!(matches!(
            DistributionTable::new(&config),
            Err(DistributionError::InvalidAddress { index: 1, .. })
        ));
    }

    #[test]
    fn test_unlock_state_counts() {
        let state = UnlockState {
            unlocked: vec![Address::parse("abc").unwrap()],
            locked: vec![],
        };
        assert_eq!(state.total(), 1);
        assert!(state.is_fully_unlocked());
        assert_eq!(state.locked_count(), 0);
    }
}
