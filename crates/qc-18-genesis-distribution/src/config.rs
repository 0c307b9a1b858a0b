//! Configuration for Genesis Distribution
//!
//! Parameters are fixed per deployment. The two shipped profiles are
//! alternatives: a node runs exactly one of them.

use crate::domain::errors::{DistributionError, DistributionResult};
use crate::genesis::{
    self, DISTRIBUTION_ADDRESSES_TOTAL, DROPLETS_PER_COIN, GENERATED_UNLOCK_ADDRESS_RATE,
    INITIAL_UNLOCKED_COUNT, MAX_COIN_SUPPLY, MAX_DROPLET_PRECISION,
    SCHEDULED_UNLOCK_ADDRESS_RATE, UNLOCK_TIME_INTERVAL_SECS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the profile.
pub const PROFILE_ENV: &str = "QC_DISTRIBUTION_PROFILE";

/// Environment variable overriding the initial unlocked count.
pub const INITIAL_UNLOCKED_ENV: &str = "QC_DISTRIBUTION_INITIAL_UNLOCKED";

/// Droplet precision cannot exceed the decimals of one coin.
const MAX_PRECISION_DIGITS: u64 = 6;

/// Named parameter profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionProfile {
    /// Rate-based unlocking intended (5 addresses per interval)
    #[default]
    Scheduled,
    /// Unlock rate disabled
    Generated,
}

impl DistributionProfile {
    pub fn config(self) -> DistributionConfig {
        let unlock_address_rate = match self {
            Self::Scheduled => SCHEDULED_UNLOCK_ADDRESS_RATE,
            Self::Generated => GENERATED_UNLOCK_ADDRESS_RATE,
        };

        DistributionConfig {
            profile: self,
            max_coin_supply: MAX_COIN_SUPPLY,
            addresses_total: DISTRIBUTION_ADDRESSES_TOTAL,
            initial_unlocked_count: INITIAL_UNLOCKED_COUNT,
            unlock_address_rate,
            unlock_time_interval_secs: UNLOCK_TIME_INTERVAL_SECS,
            max_droplet_precision: MAX_DROPLET_PRECISION,
            addresses: genesis::distribution_address_list(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Generated => "generated",
        }
    }
}

impl fmt::Display for DistributionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionProfile {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "generated" => Ok(Self::Generated),
            other => Err(DistributionError::UnknownProfile(other.to_string())),
        }
    }
}

/// Distribution configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Profile these values were derived from
    pub profile: DistributionProfile,
    /// Total coin supply, all of it allocated at genesis
    pub max_coin_supply: u64,
    /// Number of distribution addresses
    pub addresses_total: u64,
    /// Length of the unlocked prefix
    pub initial_unlocked_count: u64,
    /// Addresses unlocked per interval. Carried, not applied.
    pub unlock_address_rate: u64,
    /// Unlock interval in seconds. Carried, not applied.
    pub unlock_time_interval_secs: u64,
    /// Decimal places of droplets accepted in outputs
    pub max_droplet_precision: u64,
    /// Literal address list, in index order
    pub addresses: Vec<String>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        DistributionProfile::default().config()
    }
}

impl DistributionConfig {
    /// Load from environment variables.
    pub fn from_env() -> DistributionResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> DistributionResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = match lookup(PROFILE_ENV) {
            Some(name) => name.parse()?,
            None => DistributionProfile::default(),
        };
        let mut config = profile.config();

        if let Some(raw) = lookup(INITIAL_UNLOCKED_ENV) {
            config.initial_unlocked_count =
                raw.trim()
                    .parse()
                    .map_err(|_| DistributionError::InvalidEnvValue {
                        key: INITIAL_UNLOCKED_ENV.to_string(),
                        value: raw.clone(),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_initial_unlocked(mut self, count: u64) -> Self {
        self.initial_unlocked_count = count;
        self
    }

    /// Coins held by each distribution address at genesis.
    ///
    /// Only meaningful once [`validate`](Self::validate) has passed.
    pub fn initial_balance(&self) -> u64 {
        self.max_coin_supply
            .checked_div(self.addresses_total)
            .unwrap_or(0)
    }

    /// Scalar integrity checks. Address strings are checked when the table is built.
    pub fn validate(&self) -> DistributionResult<()> {
        if self.addresses_total == 0 {
            return Err(DistributionError::NoAddresses);
        }

        if self.max_coin_supply % self.addresses_total != 0 {
            return Err(DistributionError::IndivisibleSupply {
                supply: self.max_coin_supply,
                total: self.addresses_total,
            });
        }

        if self.initial_unlocked_count > self.addresses_total {
            return Err(DistributionError::UnlockedCountTooLarge {
                initial: self.initial_unlocked_count,
                total: self.addresses_total,
            });
        }

        if self.addresses.len() as u64 != self.addresses_total {
            return Err(DistributionError::AddressCountMismatch {
                expected: self.addresses_total,
                actual: self.addresses.len(),
            });
        }

        if self.max_droplet_precision > MAX_PRECISION_DIGITS {
            return Err(DistributionError::InvalidDropletPrecision {
                precision: self.max_droplet_precision,
                max: MAX_PRECISION_DIGITS,
            });
        }

        if self.max_coin_supply.checked_mul(DROPLETS_PER_COIN).is_none() {
            return Err(DistributionError::SupplyOverflow);
        }

        Ok(())
    }
}
