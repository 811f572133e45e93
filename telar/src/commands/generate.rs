use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use telar_codegen::TargetCodegen;
use telar_schema::{Catalog, ReferenceMode, resolve_relations};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the interface schema (defaults to ./api.json)
    #[arg(short, long, default_value = "api.json")]
    pub schema: PathBuf,

    /// Output directory root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Name of the backend domain and frontend feature
    #[arg(short, long, default_value = "library")]
    pub domain: String,

    /// Which target ecosystem to emit
    #[arg(short, long, value_enum, default_value_t = Target::All)]
    pub target: Target,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Accept foreign-key markers that point at entities missing from the
    /// schema, like the legacy generator did
    #[arg(long)]
    pub allow_dangling_refs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    All,
    Backend,
    Frontend,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut catalog = Catalog::from_file(&self.schema).unwrap_or_exit();
        let mode = if self.allow_dangling_refs {
            ReferenceMode::Permissive
        } else {
            ReferenceMode::Strict
        };
        resolve_relations(&mut catalog, mode).unwrap_or_exit();

        let generators = self.generators(&catalog);
        if self.dry_run {
            self.run_preview(&generators)
        } else {
            self.run_generation(&catalog, &generators)
        }
    }

    fn generators<'a>(&self, catalog: &'a Catalog) -> Vec<Box<dyn TargetCodegen + 'a>> {
        let mut generators: Vec<Box<dyn TargetCodegen + 'a>> = Vec::new();
        if self.target != Target::Frontend {
            generators.push(Box::new(telar_codegen_django::Generator::new(
                catalog,
                self.domain.as_str(),
            )));
        }
        if self.target != Target::Backend {
            generators.push(Box::new(telar_codegen_angular::Generator::new(
                catalog,
                self.domain.as_str(),
            )));
        }
        generators
    }

    fn run_generation(
        &self,
        catalog: &Catalog,
        generators: &[Box<dyn TargetCodegen + '_>],
    ) -> Result<()> {
        // Print entity summary
        println!("Entities ({}):", catalog.len());
        for entity in catalog.entities() {
            let relations = entity.relations().count();
            if relations > 0 {
                println!(
                    "  {} /{} ({} properties, {} relations)",
                    entity.name,
                    entity.api_route(),
                    entity.properties.len(),
                    relations
                );
            } else {
                println!(
                    "  {} /{} ({} properties)",
                    entity.name,
                    entity.api_route(),
                    entity.properties.len()
                );
            }
        }
        println!();

        let mut skipped = Vec::new();
        for generator in generators {
            let summary = generator
                .generate(&self.output)
                .wrap_err_with(|| format!("Failed to generate {} code", generator.target()))?;
            println!(
                "{}: {} files written under {}",
                generator.target(),
                summary.written.len(),
                self.output.display()
            );
            skipped.extend(summary.skipped);
        }

        // Report scaffolds that were left to hand edits
        if !skipped.is_empty() {
            println!();
            println!("Kept existing scaffolds:");
            for path in &skipped {
                println!("  = {}", path.display());
            }
        }

        Ok(())
    }

    fn run_preview(&self, generators: &[Box<dyn TargetCodegen + '_>]) -> Result<()> {
        let mut total = 0;
        for generator in generators {
            for file in generator.preview() {
                println!("── {} ──", file.path);
                println!("{}", file.content);
                total += 1;
            }
        }

        println!("── Summary ──");
        println!("{} files would be generated", total);

        Ok(())
    }
}
