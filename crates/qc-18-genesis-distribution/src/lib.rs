//! # QC-18: Genesis Distribution Subsystem
//!
//! Genesis coin allocation and the locked-distribution spend rule.
//!
//! ## Role in System
//!
//! - **Distribution Table**: fixed list of addresses, each holding an equal
//!   share of the max coin supply
//! - **Unlock Partition**: first `initial_unlocked_count` addresses are
//!   spendable, the rest are locked
//! - **Lock Validator**: classifies transactions that spend locked outputs;
//!   the ledger rejects them
//!
//! ```text
//! [DistributionConfig] → DistributionTable → UnlockState → LockedSet
//!                                                              │
//!                          Ledger validation ──inputs──→ transaction_is_locked
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (DistributionTable, UnlockState), errors, invariants
//! - **Algorithms**: prefix partition, locked-set membership
//! - **Ports**: Inbound (DistributionApi) and Outbound (OutputOwnerResolver, UnlockPolicy)
//! - **Adapters**: StaticUnlockPolicy, InMemoryOutputOwners
//! - **Application**: Service orchestration
//!
//! ## Unlocking
//!
//! `unlock_address_rate` and `unlock_time_interval_secs` are carried in the
//! configuration but never applied. The shipped [`StaticUnlockPolicy`] keeps
//! the partition fixed for the life of the process.

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod genesis;
pub mod ports;

pub use adapters::{InMemoryOutputOwners, StaticUnlockPolicy};
pub use application::service::DistributionService;
pub use config::{DistributionConfig, DistributionProfile};
pub use domain::entities::*;
pub use domain::errors::{
    AddressError, DistributionError, DistributionResult, LockError, LockResult, ResolveError,
};
pub use domain::value_objects::*;
pub use ports::inbound::DistributionApi;
pub use ports::outbound::{OutputOwnerResolver, UnlockPolicy};
