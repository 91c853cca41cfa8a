//! # Stats Provider Seam
//!
//! The contract between the core and whatever knows players' point
//! statistics: a web API client, a roster file, a test fixture.
//!
//! A lookup must be fully resolved before a [`Player`] reaches the models.
//! When it fails, the caller decides what to do (typically: ask for manual
//! values); the core never retries or defaults.

use crate::error::ProviderError;
use crate::player::Player;

/// Source of per-point statistics for named players.
///
/// Implementations must be `Send + Sync` so one provider can be shared
/// behind an `Arc`. The trait is object-safe to allow runtime selection.
pub trait StatsProvider: Send + Sync {
    /// Look up `name` and return a validated player.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::NotFound`] when the provider has no such player.
    /// - [`ProviderError::Parse`] when the record exists but is unusable.
    fn lookup(&self, name: &str) -> Result<Player, ProviderError>;

    /// Human-readable name of this provider, for logs.
    fn provider_name(&self) -> &str;
}
