use serde::Serialize;

use super::{ProvisionError, require, require_option, require_storage, storage_as_string};

pub const DB_ENGINES: &[&str] = &["mysql", "postgresql", "mariadb", "oracle", "sqlserver"];
pub const DB_INTERFACE_CLASSES: &[&str] =
    &["db.t3.micro", "db.t3.small", "db.t3.medium", "db.m5.large"];
pub const MIN_DATABASE_STORAGE_GB: u32 = 5;

/// Request for a new managed database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseRequest {
    pub engine: String,
    /// Instance class, e.g. `db.t3.micro`
    pub db_interface: String,
    pub identifier: String,
    #[serde(serialize_with = "storage_as_string")]
    pub storage: u32,
    /// Initial database name
    pub name: String,
}

impl DatabaseRequest {
    pub fn validate(&self) -> Result<(), ProvisionError> {
        require_option("engine", &self.engine, DB_ENGINES)?;
        require_option("db_interface", &self.db_interface, DB_INTERFACE_CLASSES)?;
        require("identifier", &self.identifier)?;
        require_storage(self.storage, MIN_DATABASE_STORAGE_GB)?;
        require("name", &self.name)?;
        Ok(())
    }

    pub fn success_message() -> &'static str {
        "Database provisioning initiated successfully!"
    }
}
