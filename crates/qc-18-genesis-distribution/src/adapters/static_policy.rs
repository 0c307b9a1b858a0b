use crate::config::DistributionConfig;
use crate::domain::value_objects::ChainPoint;
use crate::ports::UnlockPolicy;

/// Policy that never advances past the initial unlocked count.
///
/// `unlock_address_rate` and `unlock_time_interval_secs` are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticUnlockPolicy;

impl UnlockPolicy for StaticUnlockPolicy {
    fn unlocked_count(&self, config: &DistributionConfig, _at: ChainPoint) -> u64 {
        config.initial_unlocked_count
    }
}
