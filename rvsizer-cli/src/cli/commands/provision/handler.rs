//! Provision command handler

use anyhow::{Result, bail};
use colored::*;
use serde::Serialize;

use super::{DatabaseArgs, InstanceArgs, ProvisionCommands};
use crate::api::ApiClient;
use crate::config::Config;
use crate::provision::{DatabaseRequest, InstanceRequest};

pub async fn handle_provision_command(cmd: ProvisionCommands, show_response: bool) -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(config.timeout())?;

    match cmd {
        ProvisionCommands::Instance(args) => {
            let endpoint =
                resolve_endpoint(args.endpoint.clone(), config.provision.instance_endpoint.clone())?;
            let request = instance_request(args);
            request.validate()?;

            submit(&client, &endpoint, &request, show_response).await?;
            println!("{}", InstanceRequest::success_message().bright_green());
        }
        ProvisionCommands::Database(args) => {
            let endpoint =
                resolve_endpoint(args.endpoint.clone(), config.provision.database_endpoint.clone())?;
            let request = database_request(args);
            request.validate()?;

            submit(&client, &endpoint, &request, show_response).await?;
            println!("{}", DatabaseRequest::success_message().bright_green());
        }
    }

    Ok(())
}

async fn submit<T: Serialize>(
    client: &ApiClient,
    endpoint: &str,
    request: &T,
    show_response: bool,
) -> Result<()> {
    let response = client.submit_provision(endpoint, request).await?;
    if show_response {
        println!("API Response:");
        println!("{}", serde_json::to_string_pretty(&response)?.dimmed());
    }
    Ok(())
}

/// Flag wins over configuration; neither means the user must supply one
fn resolve_endpoint(flag: Option<String>, configured: Option<String>) -> Result<String> {
    match flag.or(configured).filter(|url| !url.trim().is_empty()) {
        Some(url) => Ok(url),
        None => bail!("Please enter the provisioning endpoint URL"),
    }
}

fn instance_request(args: InstanceArgs) -> InstanceRequest {
    InstanceRequest {
        instance_name: args.name.trim().to_string(),
        instance_type: args.instance_type,
        storage: args.storage,
        os_type: args.os,
    }
}

fn database_request(args: DatabaseArgs) -> DatabaseRequest {
    DatabaseRequest {
        engine: args.engine,
        db_interface: args.db_interface,
        identifier: args.identifier.trim().to_string(),
        storage: args.storage,
        name: args.name.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_endpoint_wins() {
        let endpoint = resolve_endpoint(
            Some("https://flag.example.com".to_string()),
            Some("https://config.example.com".to_string()),
        )
        .unwrap();
        assert_eq!(endpoint, "https://flag.example.com");
    }

    #[test]
    fn test_configured_endpoint_used() {
        let endpoint =
            resolve_endpoint(None, Some("https://config.example.com".to_string())).unwrap();
        assert_eq!(endpoint, "https://config.example.com");
    }

    #[test]
    fn test_missing_endpoint() {
        let err = resolve_endpoint(None, None).unwrap_err();
        assert_eq!(err.to_string(), "Please enter the provisioning endpoint URL");
        assert!(resolve_endpoint(Some("  ".to_string()), None).is_err());
    }

    #[test]
    fn test_instance_request_from_args() {
        let request = instance_request(InstanceArgs {
            name: " web-01 ".to_string(),
            instance_type: "t2.small".to_string(),
            storage: 20,
            os: "RHEL".to_string(),
            endpoint: None,
        });

        assert_eq!(request.instance_name, "web-01");
        assert_eq!(request.os_type, "RHEL");
        assert!(request.validate().is_ok());
    }
}
