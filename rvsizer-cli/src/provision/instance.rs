use serde::Serialize;

use super::{ProvisionError, require, require_option, require_storage, storage_as_string};

pub const INSTANCE_TYPES: &[&str] = &["t2.micro", "t2.small", "t2.medium", "m5.large", "c5.large"];
pub const OS_TYPES: &[&str] = &["Amazon Linux 2", "Ubuntu", "Windows", "RHEL"];
pub const MIN_INSTANCE_STORAGE_GB: u32 = 1;

/// Request for a new compute instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceRequest {
    pub instance_name: String,
    pub instance_type: String,
    #[serde(serialize_with = "storage_as_string")]
    pub storage: u32,
    pub os_type: String,
}

impl InstanceRequest {
    pub fn validate(&self) -> Result<(), ProvisionError> {
        require("instance_name", &self.instance_name)?;
        require_option("instance_type", &self.instance_type, INSTANCE_TYPES)?;
        require_storage(self.storage, MIN_INSTANCE_STORAGE_GB)?;
        require_option("os_type", &self.os_type, OS_TYPES)?;
        Ok(())
    }

    pub fn success_message() -> &'static str {
        "Instance provisioning initiated successfully!"
    }
}
