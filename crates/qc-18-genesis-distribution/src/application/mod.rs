//! Application layer for Genesis Distribution

pub mod service;

pub use service::DistributionService;
