//! Adapters implementing the outbound ports

pub mod memory_owners;
pub mod static_policy;

pub use memory_owners::InMemoryOutputOwners;
pub use static_policy::StaticUnlockPolicy;
