//! Command line contract tests

use serde_json::{json, Value};

use redis_service_adapter::binding::Binder;
use redis_service_adapter::cli::{Adapter, EXIT_FAILURE};
use redis_service_adapter::errors::OPERATOR_CONTACT_MESSAGE;
use redis_service_adapter::models::manifest::BoshManifest;

use crate::fixtures::{fixed_generator, FIXED_PASSWORD};

fn adapter() -> Adapter {
    Adapter::new(fixed_generator(), Binder::default())
}

fn service_deployment(version: &str) -> String {
    json!({
        "deployment_name": "service-instance_abc",
        "releases": [{"name": "redis-release", "version": version, "jobs": ["redis-server"]}],
        "stemcell": {"stemcell_os": "ubuntu-jammy", "stemcell_version": "1.200"}
    })
    .to_string()
}

fn plan_json(properties: Value) -> String {
    json!({
        "instance_groups": [{
            "name": "redis-server",
            "vm_type": "small",
            "persistent_disk_type": "10GB",
            "instances": 1,
            "networks": ["services"],
            "azs": ["z1"]
        }],
        "properties": properties
    })
    .to_string()
}

fn generate(version: &str, previous_manifest: &str) -> (i32, String) {
    let args: Vec<String> = vec![
        "generate-manifest".to_string(),
        service_deployment(version),
        plan_json(json!({"persistence": true})),
        json!({"parameters": {}}).to_string(),
        previous_manifest.to_string(),
        "null".to_string(),
    ];
    adapter().run(&args)
}

#[test]
fn test_generate_then_update_then_bind() {
    let (code, created) = generate("1.0", "");
    assert_eq!(code, 0);
    let manifest: BoshManifest = serde_yaml::from_str(&created).unwrap();
    assert_eq!(
        manifest.instance_groups[0].redis_properties().unwrap().password,
        FIXED_PASSWORD
    );

    let (code, updated) = generate("1.1", &created);
    assert_eq!(code, 0);
    let updated: BoshManifest = serde_yaml::from_str(&updated).unwrap();
    assert_eq!(updated.releases[0].version, "1.1");

    let args: Vec<String> = vec![
        "create-binding".to_string(),
        "binding-1".to_string(),
        json!({"redis-server": ["10.0.8.4"]}).to_string(),
        created,
        json!({"context": {"platform": "cloudfoundry"}}).to_string(),
        json!({"secret_pass": "generated"}).to_string(),
    ];
    let (code, output) = adapter().run(&args);
    assert_eq!(code, 0);

    let binding: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(binding["credentials"]["host"], "10.0.8.4");
    assert_eq!(binding["credentials"]["port"], 6379);
    assert_eq!(binding["credentials"]["password"], FIXED_PASSWORD);
    assert_eq!(binding["credentials"]["generated_secret"], "generated");
}

#[test]
fn test_downgrade_message_reaches_caller() {
    let (_, created) = generate("2.5", "");
    let (code, output) = generate("2.4", &created);
    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(
        output,
        "error generating manifest: new release version 2.4 is lower than existing release version 2.5"
    );
}

#[test]
fn test_configuration_detail_is_not_leaked() {
    let args: Vec<String> = vec![
        "generate-manifest".to_string(),
        service_deployment("1"),
        plan_json(json!({})),
        "{}".to_string(),
        String::new(),
        String::new(),
    ];
    let (code, output) = adapter().run(&args);
    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(output, OPERATOR_CONTACT_MESSAGE);
}

#[test]
fn test_persistence_is_quoted_in_output() {
    let (code, created) = generate("1", "");
    assert_eq!(code, 0);
    assert!(created.contains(r#""persistence": "yes""#));
    assert!(!created.contains("persistence: yes"));

    let raw: Value = serde_yaml::from_str(&created).unwrap();
    assert_eq!(raw["instance_groups"][0]["properties"]["redis"]["persistence"], "yes");
    assert_eq!(raw["instance_groups"][0]["properties"]["redis"]["maxclients"], 10000);
    assert_eq!(raw["update"]["max_in_flight"], 4);
}

#[test]
fn test_version_like_strings_stay_strings() {
    let (_, created) = generate("2.0", "");
    assert!(created.contains(r#""version": "2.0""#));
    assert!(created.contains(r#""canary_watch_time": "30000-240000""#));
}
