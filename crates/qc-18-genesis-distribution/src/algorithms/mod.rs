//! Algorithms module for Genesis Distribution
//!
//! Contains:
//! - Prefix/suffix unlock partition
//! - Locked-address membership check

pub mod lock_check;
pub mod partition;

pub use lock_check::{find_locked_input, LockedSet};
pub use partition::{partition, split_point};
