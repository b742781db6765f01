//! Manifest generation
//!
//! Turns a service deployment, a plan, request parameters and the previously
//! applied manifest (present on update, absent on create) into the manifest
//! for a single Redis server instance group.

use serde_json::Value;
use tracing::{debug, error, info};

use crate::errors::AdapterError;
use crate::manifest::password::{PasswordGenerator, RandomPasswordGenerator};
use crate::manifest::releases::find_release_for_job;
use crate::manifest::update::resolve_update_block;
use crate::manifest::upgrade::validate_upgrade_path;
use crate::models::deployment::ServiceDeployment;
use crate::models::manifest::{
    BoshManifest, InstanceGroup, Job, Network, Properties, RedisProperties, Release, Stemcell,
    StoredRedisProperties,
};
use crate::models::plan::Plan;
use crate::models::request::RequestParameters;
use crate::options::{
    GeneratorOptions, MAX_CLIENTS_PARAM, PERSISTENCE_PROPERTY_KEY, REDIS_SERVER_JOB_NAME,
};

/// Builds deployment manifests for the Redis service
pub struct ManifestGenerator {
    password_generator: Box<dyn PasswordGenerator>,
    options: GeneratorOptions,
}

impl ManifestGenerator {
    /// Create a generator using OS randomness for new passwords
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            password_generator: Box::new(RandomPasswordGenerator),
            options,
        }
    }

    /// Replace the password generator
    pub fn with_password_generator(mut self, generator: impl PasswordGenerator + 'static) -> Self {
        self.password_generator = Box::new(generator);
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the manifest for a create (no previous manifest) or an update.
    ///
    /// The previous plan is part of the broker contract but does not influence
    /// the result.
    pub fn generate_manifest(
        &self,
        deployment: &ServiceDeployment,
        plan: &Plan,
        request_params: &RequestParameters,
        previous_manifest: Option<&BoshManifest>,
        _previous_plan: Option<&Plan>,
    ) -> Result<BoshManifest, AdapterError> {
        let illegal_params = find_illegal_arbitrary_params(request_params);
        if !illegal_params.is_empty() {
            return Err(AdapterError::UnsupportedParameters(illegal_params));
        }

        if let Some(previous) = previous_manifest {
            validate_upgrade_path(REDIS_SERVER_JOB_NAME, previous, &deployment.releases)?;
        }

        let Some(plan_group) = plan.instance_group(REDIS_SERVER_JOB_NAME) else {
            let detail = format!("no {} instance group definition found", REDIS_SERVER_JOB_NAME);
            error!("{}", detail);
            return Err(AdapterError::ConfigError(detail));
        };

        let properties = self.redis_server_properties(plan, request_params, previous_manifest)?;

        let redis_release = find_release_for_job(REDIS_SERVER_JOB_NAME, &deployment.releases)?;
        let jobs = vec![Job {
            name: REDIS_SERVER_JOB_NAME.to_string(),
            release: redis_release.name.clone(),
        }];

        let releases = deployment
            .releases
            .iter()
            .map(|release| Release {
                name: release.name.clone(),
                version: release.version.clone(),
            })
            .collect();

        let stemcell_alias = self.options.stemcell_alias.clone();

        info!(
            "Generated manifest for {} ({})",
            deployment.deployment_name,
            if previous_manifest.is_some() { "update" } else { "create" }
        );

        Ok(BoshManifest {
            name: deployment.deployment_name.clone(),
            releases,
            stemcells: vec![Stemcell {
                alias: stemcell_alias.clone(),
                os: deployment.stemcell.stemcell_os.clone(),
                version: deployment.stemcell.stemcell_version.clone(),
            }],
            instance_groups: vec![InstanceGroup {
                name: REDIS_SERVER_JOB_NAME.to_string(),
                instances: plan_group.instances,
                jobs,
                vm_type: plan_group.vm_type.clone(),
                vm_extensions: plan_group.vm_extensions.clone(),
                persistent_disk_type: plan_group.persistent_disk_type.clone(),
                stemcell: stemcell_alias,
                networks: plan_group
                    .networks
                    .iter()
                    .map(|name| Network { name: name.clone() })
                    .collect(),
                azs: plan_group.azs.clone(),
                properties,
            }],
            update: resolve_update_block(plan.update.as_ref(), &self.options.default_update),
            properties: Properties::new(),
        })
    }

    fn redis_server_properties(
        &self,
        plan: &Plan,
        request_params: &RequestParameters,
        previous_manifest: Option<&BoshManifest>,
    ) -> Result<Properties, AdapterError> {
        let previous = previous_manifest
            .map(previous_redis_properties)
            .transpose()?;

        let persistence = persistence_for_redis_server(&plan.properties)?;
        let password = self.password_for_redis_server(previous.as_ref())?;
        let maxclients = self.max_clients_for_redis_server(request_params, previous.as_ref())?;

        RedisProperties {
            persistence,
            password,
            maxclients,
            secret: None,
        }
        .into_properties()
    }

    fn password_for_redis_server(
        &self,
        previous: Option<&StoredRedisProperties>,
    ) -> Result<String, AdapterError> {
        match previous {
            Some(props) => Ok(props.password.clone()),
            None => {
                debug!("No previous manifest, generating a new password");
                self.password_generator.generate()
            }
        }
    }

    fn max_clients_for_redis_server(
        &self,
        request_params: &RequestParameters,
        previous: Option<&StoredRedisProperties>,
    ) -> Result<i64, AdapterError> {
        if let Some(configured) = request_params.arbitrary_params().get(MAX_CLIENTS_PARAM) {
            let value = configured.as_f64().ok_or_else(|| AdapterError::InvalidParameter {
                name: MAX_CLIENTS_PARAM.to_string(),
                reason: format!("expected a number, got {}", configured),
            })?;
            return Ok(value as i64);
        }

        Ok(previous
            .and_then(|props| props.maxclients)
            .unwrap_or(self.options.default_max_clients))
    }
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

/// Arbitrary parameter keys other than the allowed tuning key, in sorted order
fn find_illegal_arbitrary_params(request_params: &RequestParameters) -> Vec<String> {
    request_params
        .arbitrary_params()
        .keys()
        .filter(|key| key.as_str() != MAX_CLIENTS_PARAM)
        .cloned()
        .collect()
}

fn previous_redis_properties(
    manifest: &BoshManifest,
) -> Result<StoredRedisProperties, AdapterError> {
    manifest
        .instance_group(REDIS_SERVER_JOB_NAME)
        .ok_or_else(|| {
            AdapterError::Internal(format!(
                "previous manifest has no {} instance group",
                REDIS_SERVER_JOB_NAME
            ))
        })?
        .redis_properties()
}

fn persistence_for_redis_server(plan_properties: &Properties) -> Result<String, AdapterError> {
    let detail = match plan_properties.get(PERSISTENCE_PROPERTY_KEY) {
        Some(Value::Bool(true)) => return Ok("yes".to_string()),
        Some(Value::Bool(false)) => return Ok("no".to_string()),
        Some(other) => format!(
            "the plan property '{}' must be a boolean, got {}",
            PERSISTENCE_PROPERTY_KEY, other
        ),
        None => format!("the plan property '{}' is missing", PERSISTENCE_PROPERTY_KEY),
    };
    error!("{}", detail);
    Err(AdapterError::ConfigError(detail))
}
