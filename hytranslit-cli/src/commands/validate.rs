//! Validate command implementation

use anyhow::Result;
use clap::Args;
use hytranslit_core::{ConfigurableScriptRules, ScriptRules};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to script definition file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub script_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating script definition: {}",
            self.script_config.display()
        );

        match ConfigurableScriptRules::from_file(&self.script_config) {
            Ok(rules) => {
                println!("✓ Script definition is valid!");
                println!("  Script code: {}", rules.code());
                println!("  Script name: {}", rules.name());
                println!("  Sequences: {}", rules.sequence_count());
                println!("  Initial rules: {}", rules.rules().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Script definition is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
