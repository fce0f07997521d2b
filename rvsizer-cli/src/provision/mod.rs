//! Provisioning requests for compute instances and managed databases
//!
//! Each request is posted as a flat JSON object of its field values.

mod database;
mod instance;

pub use database::DatabaseRequest;
pub use instance::InstanceRequest;

/// Validation failure for a provisioning request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    /// Required field left blank
    MissingField { field: &'static str },
    /// Value not in the field's option list
    UnknownOption {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    /// Storage below the minimum size
    StorageTooSmall { minimum: u32, got: u32 },
}

impl std::fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisionError::MissingField { field } => write!(f, "'{}' is required", field),
            ProvisionError::UnknownOption {
                field,
                value,
                allowed,
            } => write!(
                f,
                "Invalid {} '{}' (expected one of: {})",
                field,
                value,
                allowed.join(", ")
            ),
            ProvisionError::StorageTooSmall { minimum, got } => write!(
                f,
                "Storage must be at least {} GB (got {} GB)",
                minimum, got
            ),
        }
    }
}

impl std::error::Error for ProvisionError {}

fn require(field: &'static str, value: &str) -> Result<(), ProvisionError> {
    if value.trim().is_empty() {
        Err(ProvisionError::MissingField { field })
    } else {
        Ok(())
    }
}

fn require_option(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ProvisionError> {
    require(field, value)?;
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ProvisionError::UnknownOption {
            field,
            value: value.to_string(),
            allowed,
        })
    }
}

fn require_storage(storage: u32, minimum: u32) -> Result<(), ProvisionError> {
    if storage < minimum {
        Err(ProvisionError::StorageTooSmall {
            minimum,
            got: storage,
        })
    } else {
        Ok(())
    }
}

/// Form inputs are text, so storage goes over the wire as a string
fn storage_as_string<S: serde::Serializer>(storage: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProvisionError::MissingField { field: "identifier" }.to_string(),
            "'identifier' is required"
        );
        assert_eq!(
            ProvisionError::StorageTooSmall { minimum: 5, got: 2 }.to_string(),
            "Storage must be at least 5 GB (got 2 GB)"
        );
        let err = ProvisionError::UnknownOption {
            field: "engine",
            value: "db2".to_string(),
            allowed: database::DB_ENGINES,
        };
        assert!(err.to_string().starts_with("Invalid engine 'db2' (expected one of: mysql,"));
    }
}
