//! Adapter configuration options

use crate::models::manifest::{MaxInFlight, Update};

/// Name of the instance group and job running the Redis server
pub const REDIS_SERVER_JOB_NAME: &str = "redis-server";

/// Port the Redis server listens on
pub const REDIS_SERVER_PORT: u16 = 6379;

/// Plan property controlling persistence
pub const PERSISTENCE_PROPERTY_KEY: &str = "persistence";

/// The only arbitrary parameter callers may pass
pub const MAX_CLIENTS_PARAM: &str = "maxclients";

/// Manifest generator options
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Alias given to the single stemcell
    pub stemcell_alias: String,

    /// maxclients when neither the request nor a previous manifest sets it
    pub default_max_clients: i64,

    /// Update block used when the plan has none
    pub default_update: Update,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            stemcell_alias: "only-stemcell".to_string(),
            default_max_clients: 10000,
            default_update: Update {
                canaries: 1,
                canary_watch_time: "30000-240000".to_string(),
                update_watch_time: "30000-240000".to_string(),
                max_in_flight: MaxInFlight::Count(4),
                serial: None,
            },
        }
    }
}

/// Binder options
#[derive(Debug, Clone)]
pub struct BinderOptions {
    /// Platform expected in the request context; others only produce a diagnostic
    pub expected_platform: String,

    /// Port reported in the credentials
    pub port: u16,
}

impl Default for BinderOptions {
    fn default() -> Self {
        Self {
            expected_platform: "cloudfoundry".to_string(),
            port: REDIS_SERVER_PORT,
        }
    }
}
