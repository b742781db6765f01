//! Release upgrade path tests

use proptest::prelude::*;
use serde_json::json;

use redis_service_adapter::errors::{AdapterError, ErrorKind};
use redis_service_adapter::models::manifest::BoshManifest;

use crate::fixtures::{deployment, fixed_generator, params, plan, redis_release};

fn deployed_at(version: &str) -> BoshManifest {
    fixed_generator()
        .generate_manifest(
            &deployment(vec![redis_release(version)]),
            &plan(Some(true)),
            &params(json!({})),
            None,
            None,
        )
        .unwrap()
}

fn upgrade(old: &str, new: &str) -> Result<BoshManifest, AdapterError> {
    let previous = deployed_at(old);
    fixed_generator().generate_manifest(
        &deployment(vec![redis_release(new)]),
        &plan(Some(true)),
        &params(json!({})),
        Some(&previous),
        None,
    )
}

fn render(major: u64, minor: u64, patch: u64, show_minor: bool, show_patch: bool) -> String {
    let mut version = major.to_string();
    if minor != 0 || show_minor {
        version.push_str(&format!(".{}", minor));
    }
    if patch != 0 || show_patch {
        version.push_str(&format!("+dev.{}", patch));
    }
    version
}

fn version_strategy() -> impl Strategy<Value = ((u64, u64, u64), String)> {
    (0u64..20, 0u64..20, 0u64..20, any::<bool>(), any::<bool>()).prop_map(
        |(major, minor, patch, show_minor, show_patch)| {
            (
                (major, minor, patch),
                render(major, minor, patch, show_minor, show_patch),
            )
        },
    )
}

#[test]
fn test_downgrade_is_rejected() {
    let err = upgrade("2.5", "2.4").unwrap_err();
    assert_eq!(
        err.to_string(),
        "error generating manifest: new release version 2.4 is lower than existing release version 2.5"
    );
    assert_eq!(err.kind(), ErrorKind::UpgradeSafety);
}

#[test]
fn test_minor_comparison_is_numeric() {
    assert!(upgrade("2.5", "2.10").is_ok());
}

#[test]
fn test_dev_builds_order_after_release() {
    assert!(upgrade("3", "3+dev.2").is_ok());
    assert!(upgrade("3+dev.2", "3+dev.1").is_err());
    assert!(upgrade("3.1+dev.9", "3.2").is_ok());
}

#[test]
fn test_latest_on_either_side_passes() {
    assert!(upgrade("latest", "1").is_ok());
    assert!(upgrade("99", "latest").is_ok());
    assert!(upgrade("latest", "not-a-version").is_ok());
}

#[test]
fn test_invalid_version_is_named() {
    let err = upgrade("1.2", "1.2.3").unwrap_err();
    assert_eq!(err.to_string(), "1.2.3 is not a valid BOSH release version");
}

#[test]
fn test_release_missing_from_previous_manifest() {
    let previous = deployed_at("1");
    let mut renamed = redis_release("2");
    renamed.name = "redis-ng".to_string();

    let err = fixed_generator()
        .generate_manifest(
            &deployment(vec![renamed]),
            &plan(Some(true)),
            &params(json!({})),
            Some(&previous),
            None,
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "no release with name redis-ng found in previous manifest"
    );
}

#[test]
fn test_upgrade_check_runs_before_plan_validation() {
    let previous = deployed_at("5");
    let err = fixed_generator()
        .generate_manifest(
            &deployment(vec![redis_release("4")]),
            &plan(None),
            &params(json!({})),
            Some(&previous),
            None,
        )
        .unwrap_err();
    assert!(matches!(err, AdapterError::ReleaseDowngrade { .. }));
}

proptest! {
    #[test]
    fn prop_upgrade_fails_iff_new_is_lower(
        (old_triple, old) in version_strategy(),
        (new_triple, new) in version_strategy(),
    ) {
        let result = upgrade(&old, &new);
        if new_triple < old_triple {
            let is_downgrade = matches!(result, Err(AdapterError::ReleaseDowngrade { .. }));
            prop_assert!(is_downgrade);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn prop_latest_always_passes((_, version) in version_strategy()) {
        prop_assert!(upgrade("latest", &version).is_ok());
        prop_assert!(upgrade(&version, "latest").is_ok());
    }
}
