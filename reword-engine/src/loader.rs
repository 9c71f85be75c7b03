//! Rule file loading
//!
//! Lines are processed strictly in order against the store as it stands at
//! that moment, so a rule may build on any earlier one. The first cycle
//! aborts the load; rules accepted before it stay in the store.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::input::Input;
use reword_core::{CycleGuard, ReplacementStore, Rule};
use serde::Serialize;

/// Summary of one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines read from the source
    pub lines: usize,
    /// Rules inserted (overwrites included)
    pub accepted: usize,
    /// Malformed lines that were skipped
    pub skipped: usize,
}

impl LoadReport {
    /// Add the counters of `other` to this report
    pub fn merge(&mut self, other: LoadReport) {
        self.lines += other.lines;
        self.accepted += other.accepted;
        self.skipped += other.skipped;
    }
}

/// Parses rule lines and inserts them through the cycle guard
#[derive(Debug, Clone)]
pub struct RuleLoader {
    delimiter: String,
    strict: bool,
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl RuleLoader {
    /// Create a loader using the delimiter and strictness of `config`
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            delimiter: config.delimiter.clone(),
            strict: config.strict_rules,
        }
    }

    /// Load every rule of `input` into `store`
    pub fn load(&self, input: Input, store: &mut dyn ReplacementStore) -> Result<LoadReport> {
        let mut source = input.open()?;
        let mut report = LoadReport::default();
        let mut line = String::new();

        log::debug!("Loading rules from {}", source.label());

        while source.read_line(&mut line)? {
            report.lines += 1;

            let Some(rule) = Rule::parse(&line, &self.delimiter) else {
                if self.strict {
                    return Err(EngineError::MalformedRule {
                        line: source.line_number(),
                        content: line,
                    });
                }
                log::debug!(
                    "Skipping malformed rule line {} of {}",
                    source.line_number(),
                    source.label()
                );
                report.skipped += 1;
                continue;
            };

            let shown = rule.to_string();
            if let Err(err) = CycleGuard::insert(store, rule) {
                log::debug!(
                    "Rule on line {} of {} rejected",
                    source.line_number(),
                    source.label()
                );
                return Err(err.into());
            }
            log::trace!("Accepted rule {shown}");
            report.accepted += 1;
        }

        log::info!(
            "Loaded {} rules from {} ({} lines, {} skipped)",
            report.accepted,
            source.label(),
            report.lines,
            report.skipped
        );
        Ok(report)
    }
}
