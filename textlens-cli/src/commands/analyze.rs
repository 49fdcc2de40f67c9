//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use textlens_core::annotator::AnnotatorRegistry;
use textlens_core::language::embedded_configs;
use textlens_core::{
    AnalysisResult, LanguageConfig, LexiconAnnotator, PipelineConfig, ProfileDetector,
    TextAnalyzer,
};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;

/// Source name used for `--text`
pub const TEXT_SOURCE: &str = "<text>";

/// Source name used for standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Analyze this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Extra language configuration file (repeatable)
    #[arg(long, value_name = "FILE")]
    pub language_config: Vec<PathBuf>,

    /// Reading speed in words per minute
    #[arg(long, value_name = "WPM")]
    pub wpm: Option<f64>,

    /// Number of keywords to report
    #[arg(long, value_name = "N")]
    pub keywords: Option<usize>,

    /// Number of word frequencies to report
    #[arg(long, value_name = "N")]
    pub frequencies: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Analyze files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel analysis
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where the text to analyze comes from
#[derive(Debug)]
enum InputSource {
    Text(String),
    Stdin,
    Files(Vec<PathBuf>),
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting text analysis");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let analyzer = self.build_analyzer(&cli_config)?;
        let format = self.resolve_format(&cli_config)?;

        let reports = match self.input_source()? {
            InputSource::Text(text) => vec![(TEXT_SOURCE.to_string(), analyzer.analyze(&text)?)],
            InputSource::Stdin => {
                let text = FileReader::read_stdin()?;
                vec![(STDIN_SOURCE.to_string(), analyzer.analyze(&text)?)]
            }
            InputSource::Files(files) => self.analyze_files(&analyzer, &files, &cli_config)?,
        };

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter = format.formatter(writer, cli_config.output.pretty_json);
        for (source, report) in &reports {
            match report {
                Some(result) => formatter.format_report(source, result)?,
                None => {
                    log::warn!("{source}: nothing to analyze");
                    if !self.quiet {
                        eprintln!("{source}: nothing to analyze");
                    }
                }
            }
        }
        formatter.finish()?;

        log::info!("Analyzed {} source(s)", reports.len());
        Ok(())
    }

    fn input_source(&self) -> Result<InputSource> {
        if let Some(text) = &self.text {
            return Ok(InputSource::Text(text.clone()));
        }

        if self.input.iter().any(|i| i == "-") {
            if self.input.len() > 1 {
                return Err(CliError::InvalidPattern(
                    "'-' (standard input) cannot be combined with files".to_string(),
                )
                .into());
            }
            return Ok(InputSource::Stdin);
        }

        Ok(InputSource::Files(resolve_patterns(&self.input)?))
    }

    /// Merge the config file with command-line overrides
    fn pipeline_config(&self, cli_config: &CliConfig) -> Result<PipelineConfig> {
        let base = &cli_config.analysis;
        PipelineConfig::builder()
            .words_per_minute(self.wpm.unwrap_or(base.words_per_minute))
            .keyword_limit(self.keywords.unwrap_or(base.keyword_limit))
            .frequency_limit(self.frequencies.unwrap_or(base.frequency_limit))
            .excerpt_chars(base.excerpt_chars)
            .default_language(base.default_language.clone())
            .build()
            .map_err(Into::into)
    }

    fn build_analyzer(&self, cli_config: &CliConfig) -> Result<TextAnalyzer> {
        let config = self.pipeline_config(cli_config)?;

        let mut registry = AnnotatorRegistry::builder().default_language(config.default_language.clone());
        for language in embedded_configs() {
            registry = registry.register(LexiconAnnotator::from_config(language)?);
        }

        let mut detector = ProfileDetector::builtin();
        for path in &self.language_config {
            let language = load_language_config(path)?;
            log::info!(
                "Registered language '{}' ({}) from {}",
                language.code(),
                language.name(),
                path.display()
            );
            detector.add_language(&language);
            registry = registry.register(LexiconAnnotator::from_config(&language)?);
        }

        let registry = registry
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(TextAnalyzer::from_parts(
            Arc::new(registry),
            Arc::new(detector),
            config,
        )?)
    }

    fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &cli_config.output.default_format;
        <OutputFormat as clap::ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    fn worker_threads(&self, cli_config: &CliConfig) -> usize {
        match self.threads {
            Some(0) | None => cli_config.performance.resolved_threads(),
            Some(n) => n,
        }
    }

    fn analyze_files(
        &self,
        analyzer: &TextAnalyzer,
        files: &[PathBuf],
        cli_config: &CliConfig,
    ) -> Result<Vec<(String, Option<AnalysisResult>)>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let analyze_one = |path: &PathBuf| -> Result<(String, Option<AnalysisResult>)> {
            let report = analyze_file(analyzer, path)?;
            progress.file_completed(&path.display().to_string());
            Ok((path.display().to_string(), report))
        };

        let reports = if self.parallel && files.len() > 1 {
            let threads = self.worker_threads(cli_config);
            log::info!("Analyzing {} files on {} threads", files.len(), threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to create thread pool")?;
            pool.install(|| files.par_iter().map(analyze_one).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(analyze_one).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(reports)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn analyze_file(analyzer: &TextAnalyzer, path: &Path) -> Result<Option<AnalysisResult>> {
    let text = FileReader::read_text(path)?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());

    analyzer
        .analyze(&text)
        .map_err(|e| CliError::ProcessingError(format!("{}: {e}", path.display())).into())
}

fn load_language_config(path: &Path) -> Result<LanguageConfig> {
    LanguageConfig::from_file(path)
        .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
}
