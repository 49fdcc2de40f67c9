//! Embedded language configurations
//!
//! The bundled models are parsed once on first access and shared for the
//! lifetime of the process.

use std::sync::OnceLock;

use crate::language::config::LanguageConfig;

/// Code of the model used when detection yields an unsupported language
pub const DEFAULT_LANGUAGE: &str = "en";

const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../configs/languages/english.toml")),
    ("pt", include_str!("../../configs/languages/portuguese.toml")),
];

static EMBEDDED: OnceLock<Vec<LanguageConfig>> = OnceLock::new();

/// All embedded language configurations that parsed successfully
pub fn embedded_configs() -> &'static [LanguageConfig] {
    EMBEDDED.get_or_init(|| {
        EMBEDDED_SOURCES
            .iter()
            .filter_map(
                |(code, source)| match LanguageConfig::from_toml_str(source) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!("Failed to load embedded {code} config: {e}");
                        None
                    }
                },
            )
            .collect()
    })
}

/// Look up an embedded language configuration by code or name
pub fn embedded_config(code: &str) -> Option<&'static LanguageConfig> {
    let wanted = code.to_lowercase();
    embedded_configs()
        .iter()
        .find(|config| config.code() == wanted || config.name().to_lowercase() == wanted)
}
