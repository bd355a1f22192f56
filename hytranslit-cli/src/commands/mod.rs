//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use hytranslit_core::Script;

pub mod generate_config;
pub mod translit;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transliterate Armenian text
    Translit(translit::TranslitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate an external script definition
    Validate(validate::ValidateArgs),

    /// Write a script definition template based on a built-in script
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available target scripts
    Scripts,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Translit(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Scripts => {
                println!("Available scripts:");
                for script in Script::all() {
                    println!("  {:<10} {} ({})", script.name().to_lowercase(), script.name(), script.code());
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text       Transliterated text as is");
                println!("  json       JSON array of documents with statistics");
            }
        }
    }
}
