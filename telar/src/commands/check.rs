use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use telar_schema::{Catalog, ReferenceMode, resolve_relations};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the interface schema (defaults to ./api.json)
    #[arg(short, long, default_value = "api.json")]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let mut catalog = Catalog::from_file(&self.schema).unwrap_or_exit();
        resolve_relations(&mut catalog, ReferenceMode::Strict).unwrap_or_exit();

        println!("✓ {} is valid\n", self.schema.display());

        let relations: usize = catalog
            .entities()
            .map(|entity| entity.relations().count())
            .sum();
        println!(
            "  {} {}, {} {}",
            catalog.len(),
            if catalog.len() == 1 { "entity" } else { "entities" },
            relations,
            if relations == 1 { "relation" } else { "relations" }
        );

        Ok(())
    }
}
