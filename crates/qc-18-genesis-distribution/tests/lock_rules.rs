//! # Locked Distribution Spend Tests (qc-18)
//!
//! Exercises the public API against both shipped profiles.
//!
//! ## Test Categories
//!
//! 1. **Startup Integrity** - Supply divisibility, address list consistency
//! 2. **Partition** - Prefix/suffix split, empty edges, idempotent getters
//! 3. **Lock Rule** - Locked spends, malformed inputs, resolver path

use qc_18_genesis_distribution::{
    genesis, ChainPoint, DistributionApi, DistributionConfig, DistributionError,
    DistributionProfile, DistributionService, InMemoryOutputOwners, LockError, OutPoint,
    SpentOutput, UnlockPolicy,
};
use std::collections::HashSet;

// =============================================================================
// TEST HELPERS
// =============================================================================

fn service(count: u64) -> DistributionService {
    DistributionService::new(DistributionConfig::default().with_initial_unlocked(count))
        .expect("valid config")
}

fn spend(service: &DistributionService, index: usize) -> SpentOutput {
    let owner = service.distribution_addresses()[index].clone();
    SpentOutput::new(OutPoint::new([index as u8; 32], index as u32), owner)
}

/// Unlocks one address per elapsed second; only used to prove the seam.
struct OnePerSecond;

impl UnlockPolicy for OnePerSecond {
    fn unlocked_count(&self, config: &DistributionConfig, at: ChainPoint) -> u64 {
        config.initial_unlocked_count.saturating_add(at.timestamp)
    }
}

// =============================================================================
// STARTUP INTEGRITY
// =============================================================================

#[test]
fn both_profiles_start() {
    for profile in [DistributionProfile::Scheduled, DistributionProfile::Generated] {
        let service = DistributionService::from_profile(profile).expect("profile is valid");
        assert_eq!(service.config().profile, profile);
        assert_eq!(service.table().total_balance(), Some(genesis::MAX_COIN_SUPPLY));
    }
}

#[test]
fn indivisible_supply_refuses_to_start() {
    let mut config = DistributionConfig::default();
    config.max_coin_supply = 300_000_001;
    config.addresses_total = 100;

    assert!(matches!(
        DistributionService::new(config),
        Err(DistributionError::IndivisibleSupply {
            supply: 300_000_001,
            total: 100
        })
    ));
}

#[test]
fn duplicate_genesis_address_refuses_to_start() {
    let mut config = DistributionConfig::default();
    config.addresses[50] = config.addresses[10].clone();

    assert!(matches!(
        DistributionService::new(config),
        Err(DistributionError::DuplicateAddress {
            first: 10,
            second: 50,
            ..
        })
    ));
}

// =============================================================================
// PARTITION
// =============================================================================

#[test]
fn partition_sizes_and_disjointness() {
    for count in [0u64, 1, 25, 50, 99, 100] {
        let service = service(count);
        let unlocked = service.unlocked_distribution_addresses();
        let locked = service.locked_distribution_addresses();

        assert_eq!(unlocked.len() + locked.len(), 100);
        assert_eq!(unlocked.len() as u64, count);

        let unlocked_set: HashSet<_> = unlocked.iter().collect();
        assert!(locked.iter().all(|a| !unlocked_set.contains(a)));

        let rejoined: Vec<_> = unlocked.into_iter().chain(locked).collect();
        assert_eq!(rejoined, service.distribution_addresses());
    }
}

#[test]
fn genesis_order_is_preserved() {
    let service = service(100);
    let expected: Vec<&str> = genesis::DISTRIBUTION_ADDRESSES.to_vec();
    let actual: Vec<String> = service
        .distribution_addresses()
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn zero_unlocked_has_empty_prefix() {
    let service = service(0);
    assert!(service.unlocked_distribution_addresses().is_empty());
    assert_eq!(service.locked_distribution_addresses().len(), 100);
    assert_eq!(service.transaction_is_locked(&[spend(&service, 0)]), Ok(true));
}

// =============================================================================
// LOCK RULE
// =============================================================================

#[test]
fn generated_profile_never_locks() {
    let service = DistributionService::from_profile(DistributionProfile::Generated).unwrap();
    assert!(service.locked_distribution_addresses().is_empty());

    let all: Vec<_> = (0..100).map(|i| spend(&service, i)).collect();
    assert_eq!(service.transaction_is_locked(&all), Ok(false));
    assert_eq!(service.transaction_is_locked(&[]), Ok(false));
}

#[test]
fn quarter_unlocked_scenario() {
    let service = service(25);

    assert_eq!(service.transaction_is_locked(&[spend(&service, 30)]), Ok(true));
    assert_eq!(service.transaction_is_locked(&[spend(&service, 10)]), Ok(false));
    assert_eq!(
        service.transaction_is_locked(&[spend(&service, 10), spend(&service, 30)]),
        Ok(true)
    );
}

#[test]
fn locked_iff_some_input_locked() {
    let service = service(60);

    for a in (0..100).step_by(7) {
        for b in (0..100).step_by(11) {
            let inputs = [spend(&service, a), spend(&service, b)];
            let expected = a >= 60 || b >= 60;
            assert_eq!(service.transaction_is_locked(&inputs), Ok(expected));
        }
    }
}

#[test]
fn rejection_is_distinct_and_explained() {
    let service = service(25);
    let err = service
        .check_transaction(&[spend(&service, 80)])
        .unwrap_err();

    assert!(err.is_locked_spend());
    assert!(err.to_string().contains("spends time-locked distribution funds"));

    let malformed = service
        .check_transaction(&[SpentOutput::unresolved(OutPoint::new([0; 32], 0))])
        .unwrap_err();
    assert!(!malformed.is_locked_spend());
}

#[test]
fn malformed_input_fails_even_when_fully_unlocked() {
    let service = service(100);
    let inputs = [
        spend(&service, 1),
        SpentOutput::unresolved(OutPoint::new([7; 32], 0)),
    ];

    assert_eq!(
        service.transaction_is_locked(&inputs),
        Err(LockError::UnresolvableInput { input_index: 1 })
    );
}

#[test]
fn resolver_path_matches_direct_path() {
    let service = service(25);
    let owners = InMemoryOutputOwners::new();
    let outpoints: Vec<OutPoint> = (0..100)
        .map(|i| {
            let outpoint = OutPoint::new([i as u8; 32], 0);
            owners
                .insert(outpoint, service.distribution_addresses()[i].clone())
                .unwrap();
            outpoint
        })
        .collect();

    for (i, outpoint) in outpoints.iter().enumerate() {
        let direct = service.transaction_is_locked(&[spend(&service, i)]);
        assert_eq!(service.check_outpoints(&[*outpoint], &owners), direct);
    }
}

#[test]
fn unlock_policy_seam_leaves_rule_unchanged() {
    let config = DistributionConfig::default().with_initial_unlocked(25);

    let at_genesis =
        DistributionService::with_policy(config.clone(), &OnePerSecond, ChainPoint::genesis())
            .unwrap();
    let later =
        DistributionService::with_policy(config, &OnePerSecond, ChainPoint::new(0, 10)).unwrap();

    assert_eq!(at_genesis.transaction_is_locked(&[spend(&at_genesis, 30)]), Ok(true));
    assert_eq!(later.transaction_is_locked(&[spend(&later, 30)]), Ok(false));
    assert_eq!(later.transaction_is_locked(&[spend(&later, 35)]), Ok(true));
}
