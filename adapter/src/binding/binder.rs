//! Binding creation and deletion

use tracing::{debug, error, warn};

use crate::binding::secret_ref::resolve_secret_ref;
use crate::binding::topology::redis_host;
use crate::errors::AdapterError;
use crate::models::binding::{Binding, BoshVms, Credentials, ManifestSecrets};
use crate::models::manifest::BoshManifest;
use crate::models::request::RequestParameters;
use crate::options::{BinderOptions, REDIS_SERVER_JOB_NAME};

/// Secret generated per deployment and handed to every binding
pub const GENERATED_SECRET_KEY: &str = "secret_pass";

/// Produces connection credentials for a running deployment
#[derive(Debug, Clone, Default)]
pub struct Binder {
    options: BinderOptions,
}

impl Binder {
    pub fn new(options: BinderOptions) -> Self {
        Self { options }
    }

    /// Build credentials for a binding.
    ///
    /// `secrets` is `None` when the broker passed no secrets at all; only then
    /// does the generated secret fall back to an empty string. A bundle that
    /// is present but lacks `secret_pass` is an interpolation failure.
    pub fn create_binding(
        &self,
        binding_id: &str,
        topology: &BoshVms,
        manifest: &BoshManifest,
        request_params: &RequestParameters,
        secrets: Option<&ManifestSecrets>,
    ) -> Result<Binding, AdapterError> {
        let context_missing = request_params.arbitrary_context().is_empty();
        if context_missing || request_params.platform() != self.options.expected_platform {
            warn!("Non Cloud Foundry platform (or pre OSBAPI 2.13) detected");
        }

        let host = redis_host(topology).inspect_err(|e| error!("{}", e))?;

        let generated_secret = match secrets {
            Some(secrets) => secrets
                .get(GENERATED_SECRET_KEY)
                .cloned()
                .ok_or(AdapterError::MissingGeneratedSecret)
                .inspect_err(|e| error!("{}", e))?,
            None => String::new(),
        };

        let redis_group = manifest.instance_group(REDIS_SERVER_JOB_NAME).ok_or_else(|| {
            AdapterError::Internal(format!(
                "manifest has no {} instance group",
                REDIS_SERVER_JOB_NAME
            ))
        })?;
        let properties = redis_group.redis_properties()?;

        let secret = match &properties.secret {
            Some(reference) => {
                resolve_secret_ref(reference, secrets).inspect_err(|e| error!("{}", e))?
            }
            None => String::new(),
        };

        debug!("Created binding {} for {}", binding_id, manifest.name);

        Ok(Binding {
            credentials: Credentials {
                host,
                port: self.options.port,
                generated_secret,
                password: properties.password,
                secret,
            },
        })
    }

    /// Nothing is stored per binding, so there is nothing to release
    pub fn delete_binding(
        &self,
        binding_id: &str,
        _topology: &BoshVms,
        manifest: &BoshManifest,
        _request_params: &RequestParameters,
    ) -> Result<(), AdapterError> {
        debug!("Deleted binding {} for {}", binding_id, manifest.name);
        Ok(())
    }
}
