//! Genesis Distribution Service
//!
//! Main service implementing DistributionApi.

use crate::adapters::StaticUnlockPolicy;
use crate::algorithms::{find_locked_input, partition, LockedSet};
use crate::config::{DistributionConfig, DistributionProfile};
use crate::domain::entities::{DistributionTable, UnlockState};
use crate::domain::errors::{DistributionError, DistributionResult, LockError, LockResult};
use crate::domain::invariants::{
    invariant_partition_complete, invariant_partition_disjoint, invariant_supply_conserved,
    invariant_unique_entries,
};
use crate::domain::value_objects::{Address, ChainPoint, Coins, OutPoint, SpentOutput};
use crate::ports::inbound::DistributionApi;
use crate::ports::outbound::{OutputOwnerResolver, UnlockPolicy};

use tracing::{debug, error, info, warn};

/// Genesis Distribution Service
///
/// Built once at startup:
/// 1. Validate configuration and build the distribution table
/// 2. Ask the unlock policy for the unlocked count
/// 3. Partition the table and check partition invariants
/// 4. Cache the locked set for validation
///
/// Immutable afterwards; share it behind an `Arc`.
#[derive(Debug)]
pub struct DistributionService {
    config: DistributionConfig,
    table: DistributionTable,
    state: UnlockState,
    locked: LockedSet,
    chain_point: ChainPoint,
}

impl DistributionService {
    /// Create a service with the static genesis partition.
    pub fn new(config: DistributionConfig) -> DistributionResult<Self> {
        Self::with_policy(config, &StaticUnlockPolicy, ChainPoint::genesis())
    }

    /// Create a service from a named profile.
    pub fn from_profile(profile: DistributionProfile) -> DistributionResult<Self> {
        Self::new(profile.config())
    }

    /// Create a service whose partition comes from `policy` evaluated at `at`.
    pub fn with_policy(
        config: DistributionConfig,
        policy: &dyn UnlockPolicy,
        at: ChainPoint,
    ) -> DistributionResult<Self> {
        let table = DistributionTable::new(&config).inspect_err(|err| {
            error!(
                profile = %config.profile,
                error = %err,
                "Genesis distribution configuration is invalid"
            );
        })?;

        if !invariant_supply_conserved(&table) {
            return Err(DistributionError::InvariantViolated(
                "balances do not sum to max coin supply",
            ));
        }
        if !invariant_unique_entries(&table) {
            return Err(DistributionError::InvariantViolated(
                "distribution entries are not unique",
            ));
        }

        let unlocked_count = policy.unlocked_count(&config, at);
        if unlocked_count > table.len() as u64 {
            warn!(
                unlocked_count,
                table_len = table.len(),
                "Unlock policy exceeds table size, clamping"
            );
        }

        let state = partition(&table, unlocked_count);
        if !invariant_partition_disjoint(&state) || !invariant_partition_complete(&state, &table) {
            return Err(DistributionError::InvariantViolated(
                "unlock partition does not split the table",
            ));
        }

        let locked = LockedSet::new(&state.locked);

        info!(
            profile = %config.profile,
            addresses = table.len(),
            unlocked = state.unlocked_count(),
            locked = state.locked_count(),
            initial_balance = table.initial_balance(),
            unlock_rate = config.unlock_address_rate,
            "Genesis distribution initialized"
        );

        Ok(Self {
            config,
            table,
            state,
            locked,
            chain_point: at,
        })
    }

    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    pub fn table(&self) -> &DistributionTable {
        &self.table
    }

    pub fn unlock_state(&self) -> &UnlockState {
        &self.state
    }

    /// Chain point the partition was computed for.
    pub fn chain_point(&self) -> ChainPoint {
        self.chain_point
    }

    /// Coins per distribution address.
    pub fn initial_balance(&self) -> Coins {
        self.table.initial_balance()
    }

    pub fn is_distribution_address(&self, address: &str) -> bool {
        self.table.contains(address)
    }

    pub fn is_locked(&self, address: &str) -> bool {
        self.locked.contains(address)
    }

    /// True only for distribution addresses in the unlocked prefix.
    pub fn is_unlocked(&self, address: &str) -> bool {
        self.table.contains(address) && !self.locked.contains(address)
    }

    /// Look up the owner of every outpoint.
    ///
    /// A lookup failure or unknown owner fails the whole transaction.
    pub fn resolve_inputs(
        &self,
        outpoints: &[OutPoint],
        resolver: &dyn OutputOwnerResolver,
    ) -> LockResult<Vec<SpentOutput>> {
        outpoints
            .iter()
            .enumerate()
            .map(|(input_index, outpoint)| {
                match resolver.resolve_owner(outpoint) {
                    Ok(Some(owner)) => Ok(SpentOutput::new(*outpoint, owner)),
                    Ok(None) => Err(LockError::UnresolvableInput { input_index }),
                    Err(source) => Err(LockError::OwnerLookupFailed {
                        input_index,
                        source,
                    }),
                }
            })
            .collect()
    }

    /// Resolve owners through `resolver`, then apply the locked-spend rule.
    pub fn check_outpoints(
        &self,
        outpoints: &[OutPoint],
        resolver: &dyn OutputOwnerResolver,
    ) -> LockResult<bool> {
        let inputs = self.resolve_inputs(outpoints, resolver).inspect_err(|err| {
            warn!(error = %err, "Rejecting transaction with unresolvable input");
        })?;
        self.transaction_is_locked(&inputs)
    }

    fn locked_input<'a>(
        &self,
        inputs: &'a [SpentOutput],
    ) -> LockResult<Option<(usize, &'a Address)>> {
        debug!(
            input_count = inputs.len(),
            locked_addresses = self.locked.len(),
            "Checking transaction inputs against locked distribution addresses"
        );

        find_locked_input(&self.locked, inputs).inspect_err(|err| {
            warn!(error = %err, "Rejecting transaction with unresolvable input");
        })
    }
}

impl DistributionApi for DistributionService {
    fn distribution_addresses(&self) -> Vec<Address> {
        self.table.all_addresses()
    }

    fn unlocked_distribution_addresses(&self) -> Vec<Address> {
        self.state.unlocked.clone()
    }

    fn locked_distribution_addresses(&self) -> Vec<Address> {
        self.state.locked.clone()
    }

    fn transaction_is_locked(&self, inputs: &[SpentOutput]) -> LockResult<bool> {
        let found = self.locked_input(inputs)?;

        if let Some((input_index, address)) = found {
            warn!(
                input_index,
                address = %address,
                "Transaction spends time-locked distribution funds"
            );
        }

        Ok(found.is_some())
    }

    fn check_transaction(&self, inputs: &[SpentOutput]) -> LockResult<()> {
        match self.locked_input(inputs)? {
            Some((input_index, address)) => {
                warn!(
                    input_index,
                    address = %address,
                    "Transaction spends time-locked distribution funds"
                );
                Err(LockError::SpendsLockedDistribution {
                    input_index,
                    address: address.clone(),
                })
            }
            None => Ok(()),
        }
    }
}
