//! Security module for Outfitter — request admission control.
//!
//! Provides:
//! - **Rate limiting**: sliding-window request budget per client

pub mod rate_limit;

pub use rate_limit::RateLimiter;
