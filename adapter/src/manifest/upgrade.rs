//! Upgrade path validation
//!
//! The release providing the server job may only move forward between
//! deployments. `latest` on either side skips the check.

use tracing::debug;

use crate::errors::AdapterError;
use crate::manifest::releases::find_release_for_job;
use crate::manifest::version::ReleaseVersion;
use crate::models::deployment::ServiceRelease;
use crate::models::manifest::BoshManifest;

/// Check that deploying `releases` over `previous_manifest` does not downgrade
/// the release providing `job`.
pub fn validate_upgrade_path(
    job: &str,
    previous_manifest: &BoshManifest,
    releases: &[ServiceRelease],
) -> Result<(), AdapterError> {
    let new_release = find_release_for_job(job, releases)?;

    let old_release = previous_manifest
        .release(&new_release.name)
        .ok_or_else(|| AdapterError::ReleaseNotInPreviousManifest(new_release.name.clone()))?;

    if ReleaseVersion::is_latest(&new_release.version)
        || ReleaseVersion::is_latest(&old_release.version)
    {
        debug!(
            "Skipping version check for {}: {} -> {}",
            new_release.name, old_release.version, new_release.version
        );
        return Ok(());
    }

    let new_version: ReleaseVersion = new_release.version.parse()?;
    let old_version: ReleaseVersion = old_release.version.parse()?;

    if old_version > new_version {
        return Err(AdapterError::ReleaseDowngrade {
            new: new_release.version.clone(),
            old: old_release.version.clone(),
        });
    }

    debug!(
        "Upgrade path for {} is valid: {} -> {}",
        new_release.name, old_release.version, new_release.version
    );
    Ok(())
}
