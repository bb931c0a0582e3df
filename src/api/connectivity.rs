//! Connectivity probe consulted before issuing a fetch.
//!
//! Platforms differ in how they know whether a network is up, so the check
//! is a trait the host implements. The controller treats a probe error as
//! "available" and lets the fetch itself fail with a precise transport
//! error, which classifies into a better message than a wrong early
//! "offline" would.

use anyhow::Result;

/// Host-supplied network availability check.
#[allow(async_fn_in_trait)]
pub trait ConnectivityProbe {
    /// Reports whether the network is currently usable.
    ///
    /// # Errors
    ///
    /// May fail when the platform signal cannot be read; callers are
    /// expected to fail open and proceed with the fetch.
    async fn is_available(&self) -> Result<bool>;
}

/// Probe for hosts without a platform connectivity signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeAvailable;

impl ConnectivityProbe for AssumeAvailable {
    async fn is_available(&self) -> Result<bool> {
        Ok(true)
    }
}
