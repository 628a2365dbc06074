//! Agency reference data for the admin page.
//!
//! The agency list changes rarely, so it is fetched at most once per TTL
//! window and served stale when the provider is down.

mod cache;
mod clock;
mod provider;

pub use cache::{AgencyCache, AgencyCacheConfig, AgencyCacheEntry};
pub use clock::{Clock, SystemClock};
pub use provider::AgencyProvider;
