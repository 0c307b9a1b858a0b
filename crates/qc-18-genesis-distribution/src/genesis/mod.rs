//! # Genesis Constants
//!
//! Deployment-fixed parameters of the genesis coin distribution.
//!
//! Two parameter profiles ship with the chain (see [`crate::config::DistributionProfile`]).
//! They share every value except the unlock rate.

mod addresses;

pub use addresses::DISTRIBUTION_ADDRESSES;

/// Maximum supply of coins.
pub const MAX_COIN_SUPPLY: u64 = 300_000_000;

/// Number of distribution addresses.
pub const DISTRIBUTION_ADDRESSES_TOTAL: u64 = 100;

/// Number of addresses spendable from genesis.
pub const INITIAL_UNLOCKED_COUNT: u64 = 100;

/// Unlock rate of the scheduled profile (addresses per interval).
pub const SCHEDULED_UNLOCK_ADDRESS_RATE: u64 = 5;

/// Unlock rate of the generated profile. Zero disables rate-based unlocking.
pub const GENERATED_UNLOCK_ADDRESS_RATE: u64 = 0;

/// Unlock interval in seconds (one year).
pub const UNLOCK_TIME_INTERVAL_SECS: u64 = 60 * 60 * 24 * 365;

/// Decimal precision of droplets accepted in outputs.
pub const MAX_DROPLET_PRECISION: u64 = 3;

/// Droplets per whole coin.
pub const DROPLETS_PER_COIN: u64 = 1_000_000;

/// Total genesis output, in droplets.
pub const GENESIS_COIN_VOLUME: u64 = MAX_COIN_SUPPLY * DROPLETS_PER_COIN;

/// Owned copy of the literal address list.
pub fn distribution_address_list() -> Vec<String> {
    DISTRIBUTION_ADDRESSES.iter().map(|a| a.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_address_list_matches_total() {
        assert_eq!(
            DISTRIBUTION_ADDRESSES.len() as u64,
            DISTRIBUTION_ADDRESSES_TOTAL
        );
    }

    #[test]
    fn test_address_list_has_no_duplicates() {
        let unique: HashSet<&str> = DISTRIBUTION_ADDRESSES.iter().copied().collect();
        assert_eq!(unique.len(), DISTRIBUTION_ADDRESSES.len());
    }

    #[test]
    fn test_genesis_coin_volume() {
        assert_eq!(GENESIS_COIN_VOLUME, 300_000_000_000_000);
        assert_eq!(MAX_COIN_SUPPLY % DISTRIBUTION_ADDRESSES_TOTAL, 0);
    }
}
