//! Configuration for the owners module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Owners module configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Owners shown per search result page
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// How long a staged deletion stays valid before it must be confirmed again
    #[serde(default = "default_pending_delete_ttl", with = "humantime_serde")]
    pub pending_delete_ttl: Duration,

    /// Insert the sample owners and pets when the database is empty
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            pending_delete_ttl: default_pending_delete_ttl(),
            seed_demo_data: false,
        }
    }
}

fn default_page_size() -> u64 {
    5
}

fn default_pending_delete_ttl() -> Duration {
    Duration::from_secs(10 * 60)
}
