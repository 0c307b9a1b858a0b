//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::LockResult;
use crate::domain::value_objects::{Address, SpentOutput};

/// Primary Genesis Distribution API
///
/// Consumed in-process by the ledger's transaction validation pipeline.
pub trait DistributionApi: Send + Sync {
    /// All distribution addresses in genesis order.
    fn distribution_addresses(&self) -> Vec<Address>;

    /// Addresses whose genesis outputs are spendable.
    fn unlocked_distribution_addresses(&self) -> Vec<Address>;

    /// Addresses whose genesis outputs may not be spent.
    fn locked_distribution_addresses(&self) -> Vec<Address>;

    /// Whether any input spends an output owned by a locked address.
    ///
    /// A `true` result obliges the caller to reject the transaction.
    /// Inputs with an unresolved owner are an error, never skipped.
    fn transaction_is_locked(&self, inputs: &[SpentOutput]) -> LockResult<bool>;

    /// Same rule shaped as a validation step.
    ///
    /// Returns `LockError::SpendsLockedDistribution` for a locked spend.
    fn check_transaction(&self, inputs: &[SpentOutput]) -> LockResult<()>;
}
