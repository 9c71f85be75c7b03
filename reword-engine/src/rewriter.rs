//! Main rewriter and builder
//!
//! A [`Rewriter`] owns one replacement store for its whole life. Rules go in
//! through [`Rewriter::load_rules`]; afterwards [`Rewriter::rewrite`] only
//! reads the store.

use crate::{
    config::EngineConfig,
    error::Result,
    input::Input,
    loader::{LoadReport, RuleLoader},
};
use reword_core::{Backend, ReplacementStore, Transducer};
use serde::Serialize;
use std::time::Instant;

/// Rewritten text with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Rewritten text, every line terminated by `\n`
    pub text: String,
    /// Counters and timing for this run
    pub metadata: RewriteMetadata,
}

/// Rewrite metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RewriteMetadata {
    /// Lines processed
    pub lines: usize,
    /// Words looked up
    pub words: usize,
    /// Words replaced
    pub replacements: usize,
    /// Bytes read, line terminators included
    pub bytes_in: usize,
    /// Bytes produced
    pub bytes_out: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Word rewriter backed by one replacement store
pub struct Rewriter {
    store: Box<dyn ReplacementStore>,
    config: EngineConfig,
    report: LoadReport,
}

impl std::fmt::Debug for Rewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rewriter")
            .field("store", &self.store.as_ref())
            .field("config", &self.config)
            .field("report", &self.report)
            .finish()
    }
}

impl Rewriter {
    /// Create a rewriter with default settings and the given backend
    pub fn new(backend: Backend) -> Self {
        Self::from_valid_config(EngineConfig::new(backend))
    }

    /// Create a rewriter from a full configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Start building a rewriter
    pub fn builder() -> RewriterBuilder {
        RewriterBuilder::new()
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        log::info!("Using {} replacement store", config.backend);
        Self {
            store: config.backend.create(),
            config,
            report: LoadReport::default(),
        }
    }

    /// Load rules from `input` into the store.
    ///
    /// May be called several times; later sources see the rules of earlier
    /// ones. On error the rules accepted before the failing line remain.
    pub fn load_rules(&mut self, input: Input) -> Result<LoadReport> {
        let report = RuleLoader::new(&self.config).load(input, self.store.as_mut())?;
        self.report.merge(report);
        Ok(report)
    }

    /// Rewrite all lines of `input`
    pub fn rewrite(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let mut source = input.open()?;
        let mut transducer = Transducer::new(self.store.as_ref());
        let mut text = String::new();
        let mut line = String::new();

        while source.read_line(&mut line)? {
            transducer.apply_line(&line, &mut text);
        }

        let stats = transducer.stats();
        let metadata = RewriteMetadata {
            lines: stats.lines,
            words: stats.words,
            replacements: stats.replacements,
            bytes_in: source.bytes_read(),
            bytes_out: text.len(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        log::info!(
            "Rewrote {} lines from {} ({} of {} words replaced)",
            metadata.lines,
            source.label(),
            metadata.replacements,
            metadata.words
        );

        Ok(Output { text, metadata })
    }

    /// Rewrite an in-memory string
    pub fn rewrite_text(&self, text: &str) -> String {
        Transducer::new(self.store.as_ref()).apply(text)
    }

    /// Read access to the store
    pub fn store(&self) -> &dyn ReplacementStore {
        self.store.as_ref()
    }

    /// Backend behind the store
    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Totals over every successful load so far
    pub fn load_report(&self) -> LoadReport {
        self.report
    }
}

/// Builder for [`Rewriter`]
///
/// Provides a fluent interface for configuring the rewriter.
#[derive(Debug, Clone, Default)]
pub struct RewriterBuilder {
    config: EngineConfig,
}

impl RewriterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store backend
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Set the rule delimiter
    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    /// Fail on malformed rule lines instead of skipping them
    pub fn strict_rules(mut self, strict: bool) -> Self {
        self.config.strict_rules = strict;
        self
    }

    /// Build the rewriter
    pub fn build(self) -> Result<Rewriter> {
        Rewriter::with_config(self.config)
    }
}
