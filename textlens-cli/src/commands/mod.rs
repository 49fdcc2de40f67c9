//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use textlens_core::language::{embedded_configs, DEFAULT_LANGUAGE};

use crate::output::OutputFormat;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files, standard input or a literal text
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in languages
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for config in embedded_configs() {
                    let marker = if config.code() == DEFAULT_LANGUAGE {
                        " (default)"
                    } else {
                        ""
                    };
                    println!("  {:<4} - {}{marker}", config.code(), config.name());
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for (name, description) in OutputFormat::descriptions() {
                    println!("  {name:<9} - {description}");
                }
            }
        }
        Ok(())
    }
}
