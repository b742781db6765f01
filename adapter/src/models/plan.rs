//! Service plan models

use serde::{Deserialize, Serialize};

use crate::models::manifest::{Properties, Update};

/// A service plan as configured by the operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Instance group layouts, in operator order
    #[serde(default)]
    pub instance_groups: Vec<PlanInstanceGroup>,

    /// Plan-level properties, uninterpreted except for the keys the generator reads
    #[serde(default)]
    pub properties: Properties,

    /// Rolling update policy; the generator falls back to its default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Update>,
}

/// Placement of one instance group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInstanceGroup {
    pub name: String,

    pub vm_type: String,

    #[serde(default)]
    pub vm_extensions: Vec<String>,

    #[serde(default)]
    pub persistent_disk_type: String,

    pub instances: u32,

    #[serde(default)]
    pub networks: Vec<String>,

    #[serde(default)]
    pub azs: Vec<String>,
}

impl Plan {
    pub fn instance_group(&self, name: &str) -> Option<&PlanInstanceGroup> {
        self.instance_groups.iter().find(|group| group.name == name)
    }
}
