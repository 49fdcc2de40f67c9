//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to describe your language");
        println!("2. Validate your configuration:");
        println!(
            "   textlens validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for analysis:");
        println!(
            "   textlens analyze -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language model for {}

[metadata]
code = "{}"
name = "Custom Language"

# Function words, matched lowercase. Excluded from frequencies and keywords
# and used for language detection. A bundled list is loaded for codes that
# have one; `words` adds to it.
[stopwords]
bundled = true
words = ["the", "a", "of", "and", "is"]

# Closed-class words keyed by coarse POS tag
# Tags: ADJ ADP ADV AUX CCONJ DET INTJ NOUN NUM PART PRON PROPN PUNCT SCONJ SYM VERB X
[lexicon.tags]
DET = ["the", "a"]
ADP = ["of"]
CCONJ = ["and"]
AUX = ["is"]

# Irregular lemmas, surface form (lowercase) to lemma
[lexicon.lemmas]
is = "be"

# Endings split off words as their own tokens ("it's" -> "it" + "'s")
[[lexicon.clitics]]
form = "'s"
tag = "PART"

# Suffix rules for lemmas, tried in order; the first match wins
[[morphology.lemma_rules]]
suffix = "s"
replacement = ""
min_stem = 3

# Suffix rules for the POS of open-class words, tried in order
[[morphology.pos_rules]]
suffix = "ly"
tag = "ADV"
min_stem = 3

[sentences]
# Sentence-ending characters
terminators = [".", "!", "?"]
# Words that keep a following dot from ending the sentence
abbreviations = ["Dr", "Mr", "etc"]

[entities]
# Label for proper-noun runs missing from the gazetteer
default_label = "MISC"
# Lowercase words allowed inside a multi-word name
connectors = ["of"]

# Known names keyed by label: PERSON ORG GPE LOC NORP DATE MISC ...
[entities.gazetteer]
GPE = ["London"]

[detection]
# Distinctive words (lowercase) that identify the language
markers = ["the", "of", "and"]
# Distinctive characters, weighted double
chars = []

# Example of a multi-word gazetteer entry: {{ GPE = ["New York"] }}
"#,
            self.language_code, self.language_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use textlens_core::{LanguageConfig, LexiconAnnotator};

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            language_code: "fr".to_string(),
            output: PathBuf::from("french.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("fr"));
        assert!(debug_str.contains("french.toml"));
    }

    #[test]
    fn test_generate_template() {
        let args = GenerateConfigArgs {
            language_code: "test".to_string(),
            output: PathBuf::from("test.toml"),
        };

        let template = args.generate_template();
        assert!(template.contains("code = \"test\""));
        assert!(template.contains("[metadata]"));
        assert!(template.contains("[sentences]"));
        assert!(template.contains("[entities.gazetteer]"));
        assert!(template.contains("{ GPE = [\"New York\"] }"));
    }

    #[test]
    fn test_template_is_a_valid_language_model() {
        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: PathBuf::from("xx.toml"),
        };

        let config = LanguageConfig::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(config.code(), "xx");
        assert_eq!(config.lexicon.tags["DET"], vec!["the", "a"]);
        assert_eq!(config.morphology.lemma_rules.len(), 1);
        assert_eq!(config.lexicon.clitics[0].form, "'s");
        assert!(LexiconAnnotator::from_config(&config).is_ok());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test_config.toml");

        let args = GenerateConfigArgs {
            language_code: "test".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"test\""));
    }
}
