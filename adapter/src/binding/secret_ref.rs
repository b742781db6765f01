//! Credential store references of the form `((name))`

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::errors::AdapterError;
use crate::models::binding::ManifestSecrets;

static SECRET_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\(([^()]+)\)\)$").expect("secret reference regex is valid"));

/// Extract the name from a `((name))` reference
pub fn parse_secret_ref(reference: &Value) -> Result<&str, AdapterError> {
    let reference = reference.as_str().ok_or(AdapterError::SecretNotString)?;
    SECRET_REF_REGEX
        .captures(reference)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
        .ok_or_else(|| AdapterError::MalformedSecretReference(reference.to_string()))
}

/// Resolve a `((name))` reference against the secrets passed to bind
pub fn resolve_secret_ref(
    reference: &Value,
    secrets: Option<&ManifestSecrets>,
) -> Result<String, AdapterError> {
    let name = parse_secret_ref(reference)?;
    secrets
        .and_then(|secrets| secrets.get(name))
        .cloned()
        .ok_or_else(|| AdapterError::MissingSecret(name.to_string()))
}
