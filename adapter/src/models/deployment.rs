//! Service deployment models

use serde::{Deserialize, Serialize};

/// What the broker wants deployed: name, stemcell and releases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDeployment {
    /// BOSH deployment name
    pub deployment_name: String,

    /// Releases available to the deployment
    #[serde(default)]
    pub releases: Vec<ServiceRelease>,

    /// Stemcell the deployment runs on
    pub stemcell: ServiceStemcell,
}

/// A release offered to the deployment, with the jobs it provides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRelease {
    /// Release name
    pub name: String,

    /// Release version, e.g. `3.2`, `4+dev.1` or `latest`
    pub version: String,

    /// Names of the jobs this release provides
    #[serde(default)]
    pub jobs: Vec<String>,
}

/// Stemcell descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStemcell {
    pub stemcell_os: String,
    pub stemcell_version: String,
}

impl ServiceRelease {
    pub fn provides_job(&self, job: &str) -> bool {
        self.jobs.iter().any(|provided| provided == job)
    }
}
