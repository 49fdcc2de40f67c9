//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textlens_core::{LanguageConfig, LexiconAnnotator};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        // Building the annotator also compiles the lexicon and rules
        let loaded = LanguageConfig::from_file(&self.language_config).and_then(|config| {
            LexiconAnnotator::from_config(&config).map(|annotator| (config, annotator))
        });

        match loaded {
            Ok((config, annotator)) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", config.code());
                println!("  Language name: {}", annotator.language_name());
                println!("  Stop-words: {}", config.stopword_set().len());
                println!("  Abbreviations: {}", config.sentences.abbreviations.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
