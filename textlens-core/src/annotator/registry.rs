//! Per-language annotation models

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{Annotator, LexiconAnnotator};
use crate::error::{Error, Result};
use crate::language::{embedded_configs, DEFAULT_LANGUAGE};

/// Immutable set of annotation models keyed by language code
///
/// Loaded once and shared read-only between concurrent analyses. Codes
/// without a registered model resolve to the default model.
#[derive(Clone)]
pub struct AnnotatorRegistry {
    models: HashMap<String, Arc<dyn Annotator>>,
    default_code: String,
    default: Arc<dyn Annotator>,
}

impl AnnotatorRegistry {
    /// Create a builder
    pub fn builder() -> AnnotatorRegistryBuilder {
        AnnotatorRegistryBuilder::default()
    }

    /// Registry over the embedded languages with English as default
    pub fn builtin() -> Result<Self> {
        let mut builder = Self::builder().default_language(DEFAULT_LANGUAGE);
        for config in embedded_configs() {
            builder = builder.register(LexiconAnnotator::from_config(config)?);
        }
        builder.build()
    }

    /// Model for `code`, or the default model when none is registered
    pub fn select(&self, code: &str) -> &Arc<dyn Annotator> {
        match self.models.get(code) {
            Some(model) => model,
            None => {
                tracing::warn!(
                    "No annotation model for '{}', falling back to '{}'",
                    code,
                    self.default_code
                );
                &self.default
            }
        }
    }

    /// Model registered for exactly `code`
    pub fn get(&self, code: &str) -> Option<&Arc<dyn Annotator>> {
        self.models.get(code)
    }

    /// Whether a model is registered for `code`
    pub fn contains(&self, code: &str) -> bool {
        self.models.contains_key(code)
    }

    /// Registered language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.models.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Code of the fallback model
    pub fn default_language(&self) -> &str {
        &self.default_code
    }
}

impl fmt::Debug for AnnotatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatorRegistry")
            .field("languages", &self.languages())
            .field("default", &self.default_code)
            .finish()
    }
}

/// Builder for [`AnnotatorRegistry`]
#[derive(Default)]
pub struct AnnotatorRegistryBuilder {
    models: HashMap<String, Arc<dyn Annotator>>,
    default_code: Option<String>,
}

impl AnnotatorRegistryBuilder {
    /// Register a model under its own language code, replacing any
    /// previous model for that code
    pub fn register(self, annotator: impl Annotator + 'static) -> Self {
        self.register_shared(Arc::new(annotator))
    }

    /// Register an already shared model
    pub fn register_shared(mut self, annotator: Arc<dyn Annotator>) -> Self {
        self.models
            .insert(annotator.language_code().to_string(), annotator);
        self
    }

    /// Set the fallback language
    pub fn default_language(mut self, code: impl Into<String>) -> Self {
        self.default_code = Some(code.into());
        self
    }

    /// Build the registry
    ///
    /// Without an explicit default, [`DEFAULT_LANGUAGE`] is used. The
    /// default must name a registered model.
    pub fn build(self) -> Result<AnnotatorRegistry> {
        let default_code = self
            .default_code
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let default = self
            .models
            .get(&default_code)
            .cloned()
            .ok_or_else(|| Error::UnsupportedLanguage(default_code.clone()))?;

        tracing::debug!(
            "Annotator registry ready with {} models, default '{}'",
            self.models.len(),
            default_code
        );

        Ok(AnnotatorRegistry {
            models: self.models,
            default_code,
            default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnnotatedDocument;

    struct Fixed(&'static str);

    impl Annotator for Fixed {
        fn language_code(&self) -> &str {
            self.0
        }

        fn annotate(&self, _text: &str) -> Result<AnnotatedDocument> {
            Ok(AnnotatedDocument::default())
        }
    }

    #[test]
    fn test_select_falls_back_to_default() {
        let registry = AnnotatorRegistry::builder()
            .register(Fixed("en"))
            .register(Fixed("pt"))
            .default_language("en")
            .build()
            .unwrap();

        assert_eq!(registry.select("pt").language_code(), "pt");
        assert_eq!(registry.select("fr").language_code(), "en");
        assert_eq!(registry.select("unknown").language_code(), "en");
        assert!(registry.get("fr").is_none());
    }

    #[test]
    fn test_missing_default_is_rejected() {
        let result = AnnotatorRegistry::builder()
            .register(Fixed("pt"))
            .default_language("en")
            .build();
        assert!(matches!(result, Err(Error::UnsupportedLanguage(code)) if code == "en"));
    }

    #[test]
    fn test_register_replaces_same_code() {
        let registry = AnnotatorRegistry::builder()
            .register(Fixed("en"))
            .register(Fixed("en"))
            .build()
            .unwrap();
        assert_eq!(registry.languages(), vec!["en"]);
        assert_eq!(registry.default_language(), "en");
    }

    #[test]
    fn test_builtin_registry() {
        let registry = AnnotatorRegistry::builtin().unwrap();
        assert_eq!(registry.languages(), vec!["en", "pt"]);
        assert_eq!(registry.default_language(), "en");
        assert!(registry.contains("pt"));
    }
}
