//! Ports module for Genesis Distribution
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::DistributionApi;
pub use outbound::{OutputOwnerResolver, UnlockPolicy};
