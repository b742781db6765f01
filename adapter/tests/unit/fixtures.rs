//! Shared test inputs

use serde_json::{json, Value};

use redis_service_adapter::errors::AdapterError;
use redis_service_adapter::manifest::ManifestGenerator;
use redis_service_adapter::models::deployment::{ServiceDeployment, ServiceRelease, ServiceStemcell};
use redis_service_adapter::models::plan::{Plan, PlanInstanceGroup};
use redis_service_adapter::models::request::RequestParameters;
use redis_service_adapter::options::GeneratorOptions;

pub const FIXED_PASSWORD: &str = "fixed-test-password";

pub fn redis_release(version: &str) -> ServiceRelease {
    ServiceRelease {
        name: "redis-release".to_string(),
        version: version.to_string(),
        jobs: vec!["redis-server".to_string()],
    }
}

pub fn deployment(releases: Vec<ServiceRelease>) -> ServiceDeployment {
    ServiceDeployment {
        deployment_name: "service-instance_abc".to_string(),
        releases,
        stemcell: ServiceStemcell {
            stemcell_os: "ubuntu-jammy".to_string(),
            stemcell_version: "1.200".to_string(),
        },
    }
}

pub fn plan(persistence: Option<bool>) -> Plan {
    let properties = match persistence {
        Some(enabled) => json!({ "persistence": enabled }),
        None => json!({}),
    };
    Plan {
        instance_groups: vec![PlanInstanceGroup {
            name: "redis-server".to_string(),
            vm_type: "small".to_string(),
            vm_extensions: vec!["public-ip".to_string()],
            persistent_disk_type: "10GB".to_string(),
            instances: 1,
            networks: vec!["services".to_string()],
            azs: vec!["z1".to_string()],
        }],
        properties: properties.as_object().cloned().unwrap_or_default(),
        update: None,
    }
}

pub fn params(value: Value) -> RequestParameters {
    serde_json::from_value(value).expect("valid request parameters")
}

pub fn fixed_generator() -> ManifestGenerator {
    ManifestGenerator::new(GeneratorOptions::default())
        .with_password_generator(|| Ok::<_, AdapterError>(FIXED_PASSWORD.to_string()))
}
