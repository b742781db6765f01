//! Server address lookup in the deployment topology

use crate::errors::AdapterError;
use crate::models::binding::BoshVms;
use crate::options::REDIS_SERVER_JOB_NAME;

/// Address of the single Redis server instance
pub fn redis_host(topology: &BoshVms) -> Result<String, AdapterError> {
    if topology.len() != 1 {
        return Err(AdapterError::InstanceGroupCount(topology.len()));
    }

    let addresses = topology
        .get(REDIS_SERVER_JOB_NAME)
        .map(Vec::as_slice)
        .unwrap_or_default();

    match addresses {
        [address] => Ok(address.clone()),
        _ => Err(AdapterError::InstanceCount(addresses.len())),
    }
}
