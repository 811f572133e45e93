use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use telar_core::ScalarType;
use telar_schema::{Catalog, ReferenceMode, resolve_relations};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to the interface schema (defaults to ./api.json)
    #[arg(short, long, default_value = "api.json")]
    pub schema: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let mut catalog = Catalog::from_file(&self.schema).unwrap_or_exit();
        resolve_relations(&mut catalog, ReferenceMode::Permissive).unwrap_or_exit();

        if catalog.is_empty() {
            println!("No entities defined");
            return Ok(());
        }

        for entity in catalog.entities() {
            println!("{} /{}", entity.name, entity.api_route());
            for property in &entity.properties {
                if let Some(relation) = &property.relation {
                    println!(
                        "  {} -> {} ({})",
                        property.name, relation.target, property.field_name
                    );
                } else if property.is_renamed() {
                    println!(
                        "  {} ({}): {}",
                        property.name,
                        property.field_name,
                        type_label(property.scalar, property.max_length)
                    );
                } else {
                    println!(
                        "  {}: {}",
                        property.name,
                        type_label(property.scalar, property.max_length)
                    );
                }
            }
        }

        Ok(())
    }
}

fn type_label(scalar: ScalarType, max_length: Option<u64>) -> String {
    match max_length {
        Some(len) if scalar == ScalarType::String => format!("{} (max {})", scalar.as_str(), len),
        _ => scalar.as_str().to_string(),
    }
}
