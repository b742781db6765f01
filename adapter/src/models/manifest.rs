//! BOSH manifest models
//!
//! Only the fields this adapter reads or writes are modelled; instance group
//! properties stay an open map with the service's own section under
//! [`REDIS_PROPERTIES_KEY`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AdapterError;

/// Key of the service's section in instance group properties
pub const REDIS_PROPERTIES_KEY: &str = "redis";

/// Open property map
pub type Properties = Map<String, Value>;

/// A BOSH deployment manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoshManifest {
    pub name: String,

    #[serde(default)]
    pub releases: Vec<Release>,

    #[serde(default)]
    pub stemcells: Vec<Stemcell>,

    #[serde(default)]
    pub instance_groups: Vec<InstanceGroup>,

    pub update: Update,

    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stemcell {
    pub alias: String,
    pub os: String,
    pub version: String,
}

/// An instance group in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroup {
    pub name: String,

    pub instances: u32,

    #[serde(default)]
    pub jobs: Vec<Job>,

    pub vm_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vm_extensions: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub persistent_disk_type: String,

    pub stemcell: String,

    #[serde(default)]
    pub networks: Vec<Network>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub azs: Vec<String>,

    #[serde(default)]
    pub properties: Properties,
}

/// A job placed on an instance group, bound to the release providing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub release: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
}

/// Rolling update policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub canaries: u32,

    pub canary_watch_time: String,

    pub update_watch_time: String,

    pub max_in_flight: MaxInFlight,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<bool>,
}

/// BOSH accepts either an instance count or a percentage such as `"25%"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaxInFlight {
    Count(u32),
    Percentage(String),
}

/// The service's own instance group properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisProperties {
    /// `"yes"` or `"no"`
    pub persistence: String,

    pub password: String,

    pub maxclients: i64,

    /// Credential store reference such as `((secret/path))`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<Value>,
}

/// The service's section as read back from a deployed manifest.
///
/// Only `password` is required. Older or hand-edited manifests may lack
/// `maxclients` or carry `persistence` as a YAML 1.1 boolean, and neither is
/// needed to carry state forward or to bind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredRedisProperties {
    pub password: String,

    #[serde(default)]
    pub maxclients: Option<i64>,

    #[serde(default)]
    pub persistence: Option<Value>,

    #[serde(default)]
    pub secret: Option<Value>,
}

impl BoshManifest {
    /// Find an instance group by name
    pub fn instance_group(&self, name: &str) -> Option<&InstanceGroup> {
        self.instance_groups.iter().find(|group| group.name == name)
    }

    /// Find a release by name
    pub fn release(&self, name: &str) -> Option<&Release> {
        self.releases.iter().find(|release| release.name == name)
    }
}

impl InstanceGroup {
    /// Read the service's property section.
    ///
    /// A missing section or a missing/non-string password means the manifest
    /// was not produced by this adapter and is reported as an internal error.
    pub fn redis_properties(&self) -> Result<StoredRedisProperties, AdapterError> {
        let section = self.properties.get(REDIS_PROPERTIES_KEY).ok_or_else(|| {
            AdapterError::Internal(format!(
                "instance group {} has no '{}' properties",
                self.name, REDIS_PROPERTIES_KEY
            ))
        })?;

        serde_json::from_value(section.clone()).map_err(|e| {
            AdapterError::Internal(format!(
                "malformed '{}' properties on instance group {}: {}",
                REDIS_PROPERTIES_KEY, self.name, e
            ))
        })
    }
}

impl RedisProperties {
    /// Wrap into an instance group property map
    pub fn into_properties(self) -> Result<Properties, AdapterError> {
        let mut properties = Properties::new();
        properties.insert(REDIS_PROPERTIES_KEY.to_string(), serde_json::to_value(self)?);
        Ok(properties)
    }
}
