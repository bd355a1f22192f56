//! Translit command implementation

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use hytranslit_core::{Input, Script, Transliterator};
use rayon::prelude::*;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{Document, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::script_source::ScriptSource;

/// Arguments for the translit command
#[derive(Debug, Args)]
pub struct TranslitArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Literal text to transliterate
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Target script
    #[arg(short, long, value_enum)]
    pub script: Option<ScriptArg>,

    /// External script definition (TOML)
    #[arg(long, value_name = "FILE", conflicts_with = "script")]
    pub script_config: Option<PathBuf>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Transliterated text as is
    Text,
    /// JSON array of documents with statistics
    Json,
}

/// Supported target scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptArg {
    /// Latin alphabet (en)
    Latin,
    /// Cyrillic alphabet (ru)
    Cyrillic,
}

impl From<ScriptArg> for Script {
    fn from(arg: ScriptArg) -> Self {
        match arg {
            ScriptArg::Latin => Script::Latin,
            ScriptArg::Cyrillic => Script::Cyrillic,
        }
    }
}

impl TranslitArgs {
    /// Execute the translit command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let source = self.script_source(&config)?;
        log::info!("Script: {}", source.display_name());
        let transliterator = source.transliterator()?;

        let documents = if let Some(text) = &self.text {
            vec![Self::transliterate_text(&transliterator, text)?]
        } else if self.input.is_empty() {
            vec![Self::transliterate_stdin(&transliterator)?]
        } else {
            let parallel = self.parallel || config.performance.parallel;
            self.transliterate_files(&transliterator, parallel, config.performance.worker_threads)?
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.output_format(&config)? {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for document in &documents {
            formatter.format_document(document)?;
        }
        formatter.finish()?;

        log::info!("Transliterated {} document(s)", documents.len());
        Ok(())
    }

    /// Resolve the script from flags, then the config file, then the default
    fn script_source(&self, config: &CliConfig) -> Result<ScriptSource> {
        if let Some(path) = &self.script_config {
            return Ok(ScriptSource::External(path.clone()));
        }
        if let Some(script) = self.script {
            return Ok(ScriptSource::BuiltIn(script.into()));
        }
        if let Some(path) = &config.translit.script_config {
            return Ok(ScriptSource::External(path.clone()));
        }

        let script = ScriptArg::from_str(&config.translit.default_script, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown default script '{}'",
                config.translit.default_script
            ))
        })?;
        Ok(ScriptSource::BuiltIn(script.into()))
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let format = OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown default format '{}'",
                config.output.default_format
            ))
        })?;
        Ok(format)
    }

    fn transliterate_text(transliterator: &Transliterator, text: &str) -> Result<Document> {
        let output = transliterator
            .process(Input::from_text(text))
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        Ok(Document {
            source: "<text>".to_string(),
            output,
        })
    }

    fn transliterate_stdin(transliterator: &Transliterator) -> Result<Document> {
        log::debug!("Reading from stdin");
        let output = transliterator
            .process_stream(io::stdin())
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        Ok(Document {
            source: "<stdin>".to_string(),
            output,
        })
    }

    fn transliterate_file(transliterator: &Transliterator, path: &Path) -> Result<Document> {
        let text = FileReader::read_text(path)?;
        let output = transliterator
            .process(Input::from_text(text))
            .map_err(|e| CliError::ProcessingError(format!("{}: {e}", path.display())))?;
        log::debug!(
            "{}: {} words in {:?}",
            path.display(),
            output.metadata.stats.word_count,
            output.metadata.duration
        );
        Ok(Document {
            source: path.display().to_string(),
            output,
        })
    }

    fn transliterate_files(
        &self,
        transliterator: &Transliterator,
        parallel: bool,
        worker_threads: usize,
    ) -> Result<Vec<Document>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to transliterate", files.len());

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let run = |path: &PathBuf| -> Result<Document> {
            let document = Self::transliterate_file(transliterator, path)?;
            progress.file_completed(&path.display().to_string());
            Ok(document)
        };

        // Output order follows the sorted file list in both modes
        let documents = if parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(worker_threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| files.par_iter().map(run).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(run).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(documents)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> TranslitArgs {
        TranslitArgs {
            input: Vec::new(),
            text: None,
            output: None,
            format: None,
            script: None,
            script_config: None,
            parallel: false,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_script_resolution_order() {
        let mut config = CliConfig::default();
        config.translit.default_script = "cyrillic".to_string();

        let mut args = args();
        assert!(matches!(
            args.script_source(&config).unwrap(),
            ScriptSource::BuiltIn(Script::Cyrillic)
        ));

        args.script = Some(ScriptArg::Latin);
        assert!(matches!(
            args.script_source(&config).unwrap(),
            ScriptSource::BuiltIn(Script::Latin)
        ));

        args.script_config = Some(PathBuf::from("custom.toml"));
        assert!(matches!(
            args.script_source(&config).unwrap(),
            ScriptSource::External(_)
        ));
    }

    #[test]
    fn test_unknown_default_script() {
        let mut config = CliConfig::default();
        config.translit.default_script = "greek".to_string();
        assert!(args().script_source(&config).is_err());
    }

    #[test]
    fn test_output_format_from_config() {
        let mut config = CliConfig::default();
        config.output.default_format = "JSON".to_string();
        assert_eq!(args().output_format(&config).unwrap(), OutputFormat::Json);

        let mut explicit = args();
        explicit.format = Some(OutputFormat::Text);
        assert_eq!(explicit.output_format(&config).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_execute_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.txt");

        let mut args = args();
        args.text = Some("Ով է այնտեղ։".to_string());
        args.output = Some(output_path.clone());
        args.execute().unwrap();

        let written = std::fs::read_to_string(output_path).unwrap();
        assert_eq!(written, "Ov e ayntegh.\n");
    }
}
