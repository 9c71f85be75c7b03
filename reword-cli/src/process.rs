//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, RunResult, TextFormatter};
use anyhow::{Context, Result};
use clap::Parser;
use reword_engine::{Backend, Input, Rewriter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Replace whole words in a text file using rewrite rules from another file
#[derive(Debug, Parser)]
#[command(name = "reword", version, about)]
pub struct ProcessArgs {
    /// Input text file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Word replacements file, one `key -> value` rule per line
    #[arg(value_name = "RULES")]
    pub rules: PathBuf,

    /// Store backend (case-insensitive)
    #[arg(value_name = "bst|rbt|hash")]
    pub backend: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rule delimiter (default: ->)
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Fail on malformed rule lines instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        // Usage errors come before any file access
        let backend: Backend = self
            .backend
            .parse()
            .map_err(|_| CliError::InvalidBackend(self.backend.clone()))?;

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        FileReader::ensure_exists(&self.input)?;
        FileReader::ensure_exists(&self.rules)?;

        let delimiter = self
            .delimiter
            .clone()
            .unwrap_or_else(|| config.rules.delimiter.clone());
        let mut rewriter = Rewriter::builder()
            .backend(backend)
            .delimiter(delimiter)
            .strict_rules(self.strict || config.rules.strict)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::info!("Starting rule loading");
        let rules = rewriter.load_rules(Input::from_file(&self.rules))?;

        log::info!("Starting text processing");
        let output = rewriter.rewrite(Input::from_file(&self.input))?;

        let run = RunResult {
            backend,
            rules,
            output: &output,
        };
        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        formatter.write_output(&run)?;
        formatter.finish()?;

        Ok(())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
