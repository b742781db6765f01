//! Error types for the Redis service adapter

use thiserror::Error;

/// Message returned to the caller when the operator's plan configuration is broken.
pub const OPERATOR_CONTACT_MESSAGE: &str =
    "Contact your operator, service configuration issue occurred";

/// Main error type for the service adapter
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("unsupported parameter(s) for this service plan: {}", .0.join(", "))]
    UnsupportedParameters(Vec<String>),

    #[error("invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("no release provided for job {0}")]
    NoReleaseForJob(String),

    #[error("job {job} defined in multiple releases: {}", .releases.join(", "))]
    AmbiguousReleaseForJob { job: String, releases: Vec<String> },

    #[error("no release with name {0} found in previous manifest")]
    ReleaseNotInPreviousManifest(String),

    #[error("{0} is not a valid BOSH release version")]
    InvalidReleaseVersion(String),

    #[error(
        "error generating manifest: new release version {new} is lower than existing release version {old}"
    )]
    ReleaseDowngrade { new: String, old: String },

    #[error("expected 1 instance group in the Redis deployment, got {0}")]
    InstanceGroupCount(usize),

    #[error("expected redis-server instance group to have only 1 instance, got {0}")]
    InstanceCount(usize),

    #[error("manifest wasn't correctly interpolated: missing value for `secret_pass`")]
    MissingGeneratedSecret,

    #[error("secret in manifest was not a string. expecting a credhub ref string")]
    SecretNotString,

    #[error("expecting a credhub ref string with format ((xxx)), but got: {0}")]
    MalformedSecretReference(String),

    #[error("secret '{0}' not present in manifest secrets passed to bind")]
    MissingSecret(String),

    #[error("Password generation error: {0}")]
    PasswordGeneration(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Broad classification of an [`AdapterError`] as seen by the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input from the caller, reported verbatim
    CallerInput,
    /// Operator configuration problem, reported generically
    Configuration,
    /// Unsafe or ambiguous upgrade, reported verbatim
    UpgradeSafety,
    /// Anything not expected in a correct deployment
    Internal,
}

impl AdapterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdapterError::UnsupportedParameters(_)
            | AdapterError::InvalidParameter { .. }
            | AdapterError::InstanceGroupCount(_)
            | AdapterError::InstanceCount(_)
            | AdapterError::MissingGeneratedSecret
            | AdapterError::SecretNotString
            | AdapterError::MalformedSecretReference(_)
            | AdapterError::MissingSecret(_)
            | AdapterError::Usage(_) => ErrorKind::CallerInput,

            AdapterError::ConfigError(_) => ErrorKind::Configuration,

            AdapterError::NoReleaseForJob(_)
            | AdapterError::AmbiguousReleaseForJob { .. }
            | AdapterError::ReleaseNotInPreviousManifest(_)
            | AdapterError::InvalidReleaseVersion(_)
            | AdapterError::ReleaseDowngrade { .. } => ErrorKind::UpgradeSafety,

            AdapterError::PasswordGeneration(_)
            | AdapterError::IoError(_)
            | AdapterError::JsonError(_)
            | AdapterError::YamlError(_)
            | AdapterError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Text safe to hand back to the broker user.
    ///
    /// Configuration errors carry operator-internal detail, so the caller only
    /// ever sees [`OPERATOR_CONTACT_MESSAGE`] for them.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Configuration => OPERATOR_CONTACT_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<anyhow::Error> for AdapterError {
    fn from(err: anyhow::Error) -> Self {
        AdapterError::Internal(err.to_string())
    }
}
