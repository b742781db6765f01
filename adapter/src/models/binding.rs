//! Binding models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Deployment topology: instance group name to instance addresses
pub type BoshVms = BTreeMap<String, Vec<String>>;

/// Secrets resolved from the credential store, by reference name
pub type ManifestSecrets = BTreeMap<String, String>;

/// Result of a bind request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub credentials: Credentials,
}

/// Connection details handed to the consuming application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub host: String,

    pub port: u16,

    /// Per-deployment generated secret (`secret_pass`)
    pub generated_secret: String,

    pub password: String,

    /// Value resolved from the credential store reference, if one is configured
    pub secret: String,
}
