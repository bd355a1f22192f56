//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use hytranslit_core::script::embedded_source;
use hytranslit_core::Script;
use std::path::PathBuf;

use super::translit::ScriptArg;
use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Built-in script to start from
    #[arg(short, long, value_enum, default_value = "latin")]
    pub script: ScriptArg,

    /// Script code for the new definition
    #[arg(short = 'c', long, value_name = "CODE", required = true)]
    pub script_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating script definition template...");
        println!("  Based on: {}", Script::from(self.script).name());
        println!("  Script code: {}", self.script_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Script definition template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the definition to customize the letter tables and rules");
        println!("2. Validate your definition:");
        println!("   hytranslit validate -c {}", self.output.display());
        println!("3. Use it for transliteration:");
        println!(
            "   hytranslit translit -i input.txt --script-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Built-in definition with its metadata replaced
    fn generate_template(&self) -> Result<String> {
        let script = Script::from(self.script);
        let source = embedded_source(script.code()).ok_or_else(|| {
            CliError::ConfigError(format!("no embedded definition for '{}'", script.code()))
        })?;

        let template = source
            .replacen(
                &format!("code = \"{}\"", script.code()),
                &format!("code = \"{}\"", self.script_code),
                1,
            )
            .replacen(
                &format!("name = \"{}\"", script.name()),
                "name = \"Custom\"",
                1,
            );

        Ok(format!(
            "# Script definition for {} (generated from {})\n\n{template}",
            self.script_code,
            script.name()
        ))
    }
}
