//! Job to release resolution

use crate::errors::AdapterError;
use crate::models::deployment::ServiceRelease;

/// Find the single release providing `job`.
///
/// Ownership of a job by more than one release is an error naming every
/// contender; it is never resolved by picking one.
pub fn find_release_for_job<'a>(
    job: &str,
    releases: &'a [ServiceRelease],
) -> Result<&'a ServiceRelease, AdapterError> {
    let providers: Vec<&ServiceRelease> = releases
        .iter()
        .filter(|release| release.provides_job(job))
        .collect();

    match providers.as_slice() {
        [] => Err(AdapterError::NoReleaseForJob(job.to_string())),
        [release] => Ok(*release),
        _ => Err(AdapterError::AmbiguousReleaseForJob {
            job: job.to_string(),
            releases: providers.iter().map(|r| r.name.clone()).collect(),
        }),
    }
}
