use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use schematics_core::provider::{Diagnostic, Provider};
use schematics_core::resource::{Resource, ResourceId, State, Value};
use schematics_core::schema::{Mutability, ResourceSchema, SchemaKind};
use schematics_provider::config::ENDPOINT_ENV;
use schematics_provider::schemas::{data_source_schemas, resource_schemas};
use schematics_provider::{ProviderConfig, SchematicsProvider, Visibility};

#[derive(Parser)]
#[command(name = "schematics")]
#[command(about = "Manage IBM Cloud Schematics objects", long_about = None)]
struct Cli {
    /// Session region
    #[arg(long, global = true, env = "IC_REGION")]
    region: Option<String>,

    /// public, private or public-and-private
    #[arg(long, global = true, env = "IC_VISIBILITY")]
    visibility: Option<Visibility>,

    /// Fixed API endpoint
    #[arg(long, global = true, env = ENDPOINT_ENV)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file against the schemas
    Validate {
        /// Path to the JSON configuration
        #[arg(default_value = "main.json")]
        file: PathBuf,
    },
    /// Show the attributes of a resource or data source type
    Schema {
        /// Type name, e.g. ibm_schematics_workspace
        resource_type: String,

        /// Show the data source schema
        #[arg(long)]
        data_source: bool,
    },
    /// Read a resource by its id
    Read {
        resource_type: String,
        id: String,
    },
    /// Look up a data source
    Data {
        resource_type: String,

        /// Lookup attributes as key=value
        #[arg(short, long = "attr", value_parser = parse_key_value)]
        attributes: Vec<(String, String)>,
    },
    /// Create every resource in a configuration file
    Create {
        #[arg(default_value = "main.json")]
        file: PathBuf,
    },
    /// Delete a resource by its id
    Delete {
        resource_type: String,
        id: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { ref file } => run_validate(file),
        Commands::Schema {
            ref resource_type,
            data_source,
        } => run_schema(resource_type, data_source),
        Commands::Read {
            ref resource_type,
            ref id,
        } => run_read(&cli, resource_type, id).await,
        Commands::Data {
            ref resource_type,
            ref attributes,
        } => run_data(&cli, resource_type, attributes).await,
        Commands::Create { ref file } => run_create(&cli, file).await,
        Commands::Delete {
            ref resource_type,
            ref id,
        } => run_delete(&cli, resource_type, id).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

fn build_provider(cli: &Cli) -> Result<SchematicsProvider, String> {
    let mut config = ProviderConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(ref region) = cli.region {
        config = config.with_region(region.clone());
    }
    if let Some(visibility) = cli.visibility {
        config = config.with_visibility(visibility);
    }
    if let Some(ref endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint).map_err(|e| e.to_string())?;
    }
    SchematicsProvider::new(config).map_err(|e| e.to_string())
}

fn get_schemas(kind: SchemaKind) -> HashMap<String, ResourceSchema> {
    let schemas = match kind {
        SchemaKind::Resource => resource_schemas(),
        SchemaKind::DataSource => data_source_schemas(),
    };
    schemas
        .into_iter()
        .map(|schema| (schema.resource_type.clone(), schema))
        .collect()
}

/// Configuration file: `{"resources": [..], "data": [..]}`, each entry
/// `{"type", "name", "attributes"}`.
fn load_config(file: &Path) -> Result<(Vec<Resource>, Vec<Resource>), String> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| format!("Parse error: {}", e))?;

    let entries = |key: &str, read_only: bool| -> Result<Vec<Resource>, String> {
        let Some(list) = json.get(key) else {
            return Ok(Vec::new());
        };
        let list = list
            .as_array()
            .ok_or_else(|| format!("'{}' must be a list", key))?;
        list.iter()
            .enumerate()
            .map(|(i, entry)| parse_entry(entry, read_only).map_err(|e| format!("{}[{}]: {}", key, i, e)))
            .collect()
    };

    Ok((entries("resources", false)?, entries("data", true)?))
}

fn parse_entry(entry: &serde_json::Value, read_only: bool) -> Result<Resource, String> {
    let field = |name: &str| {
        entry
            .get(name)
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| format!("missing '{}'", name))
    };
    let mut resource = Resource::new(field("type")?, field("name")?).with_read_only(read_only);
    if let Some(attributes) = entry.get("attributes").and_then(serde_json::Value::as_object) {
        for (key, value) in attributes {
            if let Some(value) = Value::from_json(value) {
                resource = resource.with_attribute(key.clone(), value);
            }
        }
    }
    Ok(resource)
}

/// Check each entry against the resource or data source schema of its type.
fn validate_resources(resources: &[Resource]) -> Result<(), String> {
    let writable = get_schemas(SchemaKind::Resource);
    let lookups = get_schemas(SchemaKind::DataSource);
    let mut all_errors = Vec::new();

    for resource in resources {
        let schemas = if resource.is_data_source() {
            &lookups
        } else {
            &writable
        };
        let Some(schema) = schemas.get(&resource.id.resource_type) else {
            all_errors.push(format!(
                "{}.{}: unknown type {}",
                resource.id.resource_type, resource.id.name, resource.id.resource_type
            ));
            continue;
        };
        if let Err(errors) = schema.validate(&resource.attributes) {
            for error in errors {
                all_errors.push(format!(
                    "{}.{}: {}",
                    resource.id.resource_type, resource.id.name, error
                ));
            }
        }
    }

    if all_errors.is_empty() {
        Ok(())
    } else {
        Err(all_errors.join("\n"))
    }
}

fn run_validate(file: &Path) -> Result<(), String> {
    let (resources, data) = load_config(file)?;

    println!("{}", "Validating...".cyan());
    validate_resources(&resources)?;
    validate_resources(&data)?;

    println!(
        "{}",
        format!(
            "✓ {} resources and {} data sources validated successfully.",
            resources.len(),
            data.len()
        )
        .green()
        .bold()
    );
    for resource in resources.iter().chain(&data) {
        println!("  • {}.{}", resource.id.resource_type, resource.id.name);
    }
    Ok(())
}

fn run_schema(resource_type: &str, data_source: bool) -> Result<(), String> {
    let kind = if data_source {
        SchemaKind::DataSource
    } else {
        SchemaKind::Resource
    };
    let schemas = get_schemas(kind);
    let schema = schemas
        .get(resource_type)
        .ok_or_else(|| format!("Unknown type: {}", resource_type))?;

    println!("{}", schema.resource_type.bold());
    if let Some(ref description) = schema.description {
        println!("{}", description.dimmed());
    }
    println!();
    for name in schema.attribute_names() {
        let Some(attr) = schema.get(name) else { continue };
        let mode = match attr.mutability {
            Mutability::Required => "required".yellow(),
            Mutability::Optional => "optional".normal(),
            Mutability::Computed => "computed".dimmed(),
            Mutability::OptionalComputed => "optional, computed".normal(),
        };
        let mut flags = Vec::new();
        if attr.force_new {
            flags.push("forces new");
        }
        if attr.sensitive {
            flags.push("sensitive");
        }
        if attr.deprecated.is_some() {
            flags.push("deprecated");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!("  {} ({}){}", name.cyan(), mode, flags.red());
    }
    Ok(())
}

fn print_state(state: &State) -> Result<(), String> {
    if !state.exists {
        let warning = Diagnostic::warning(format!(
            "{}.{} does not exist.",
            state.id.resource_type, state.id.name
        ));
        println!("{}", warning.to_string().yellow());
        return Ok(());
    }

    let mut attributes: serde_json::Map<String, serde_json::Value> = state
        .attributes
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
        .collect();
    if let Some(ref identifier) = state.identifier {
        attributes.insert("id".to_string(), serde_json::Value::String(identifier.clone()));
    }
    let sorted: std::collections::BTreeMap<_, _> = attributes.into_iter().collect();
    let rendered = serde_json::to_string_pretty(&sorted).map_err(|e| e.to_string())?;
    println!("{}", rendered);
    Ok(())
}

async fn run_read(cli: &Cli, resource_type: &str, id: &str) -> Result<(), String> {
    let provider = build_provider(cli)?;
    let resource_id = ResourceId::new(resource_type, id);
    let state = provider
        .read(&resource_id, Some(id))
        .await
        .map_err(|e| e.to_string())?;
    print_state(&state)
}

async fn run_data(
    cli: &Cli,
    resource_type: &str,
    attributes: &[(String, String)],
) -> Result<(), String> {
    let provider = build_provider(cli)?;
    let mut query = Resource::new(resource_type, "lookup").with_read_only(true);
    for (key, value) in attributes {
        query = query.with_attribute(key.clone(), Value::String(value.clone()));
    }
    validate_resources(std::slice::from_ref(&query))?;

    let state = provider
        .read_data_source(&query)
        .await
        .map_err(|e| e.to_string())?;
    print_state(&state)
}

async fn run_create(cli: &Cli, file: &Path) -> Result<(), String> {
    let (resources, _) = load_config(file)?;
    validate_resources(&resources)?;
    let provider = build_provider(cli)?;

    let mut failed = 0;
    for resource in &resources {
        print!("  {} {}.{} ... ", "+".green(), resource.id.resource_type, resource.id.name);
        match provider.create(resource).await {
            Ok(state) => println!(
                "{} {}",
                "✓".green(),
                state.identifier.as_deref().unwrap_or_default()
            ),
            Err(e) => {
                println!("{}", "✗".red());
                eprintln!("    {}", e.to_diagnostic().to_string().red());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        Err(format!("{} of {} resources failed", failed, resources.len()))
    } else {
        println!("{}", format!("Created {} resources.", resources.len()).green().bold());
        Ok(())
    }
}

async fn run_delete(cli: &Cli, resource_type: &str, id: &str) -> Result<(), String> {
    let provider = build_provider(cli)?;
    let resource_id = ResourceId::new(resource_type, id);
    provider
        .delete(&resource_id, id)
        .await
        .map_err(|e| e.to_string())?;
    println!("{} {}.{}", "Deleted".green().bold(), resource_type, id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_arguments() {
        assert_eq!(
            parse_key_value("workspace_id=us-south.workspace.x.1"),
            Ok(("workspace_id".to_string(), "us-south.workspace.x.1".to_string()))
        );
        assert!(parse_key_value("no-separator").is_err());
    }

    #[test]
    fn entries_become_resources() {
        let entry = serde_json::json!({
            "type": "ibm_schematics_action",
            "name": "demo",
            "attributes": {"name": "demo", "tags": ["a", "b"], "description": null}
        });
        let resource = parse_entry(&entry, false).unwrap();
        assert_eq!(resource.id, ResourceId::new("ibm_schematics_action", "demo"));
        assert_eq!(resource.get("name"), Some(&Value::String("demo".to_string())));
        assert!(resource.get("description").is_none());
        assert!(parse_entry(&serde_json::json!({"name": "x"}), false).is_err());
    }

    #[test]
    fn unknown_types_fail_validation() {
        let resource = Resource::new("ibm_schematics_cart", "c");
        let err = validate_resources(&[resource]).unwrap_err();
        assert!(err.contains("unknown type"));
    }

    #[test]
    fn invalid_workspace_name_fails_validation() {
        let resource = Resource::new("ibm_schematics_workspace", "ws")
            .with_attribute("name", Value::String("-bad name".to_string()))
            .with_attribute("location", Value::String("us-south".to_string()))
            .with_attribute("resource_group", Value::String("Default".to_string()))
            .with_attribute("template_type", Value::String("terraform_v1.5".to_string()));
        let err = validate_resources(&[resource]).unwrap_err();
        assert!(err.contains("ibm_schematics_workspace.ws"));
    }

    #[test]
    fn data_entries_use_data_source_schemas() {
        let query = Resource::new("ibm_schematics_inventory", "inv")
            .with_read_only(true)
            .with_attribute("inventory_id", Value::String("inv-1".to_string()));
        assert!(validate_resources(std::slice::from_ref(&query)).is_ok());

        let as_resource = query.with_read_only(false);
        let err = validate_resources(&[as_resource]).unwrap_err();
        assert!(err.contains("unknown type"));
    }
}
