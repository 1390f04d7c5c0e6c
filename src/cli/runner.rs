//! CLI runner - reads inputs from stdin and prints lookup results

use crate::cli::commands::Cli;
use crate::error::{Error, Result, ResultExt};
use crate::error_log::ErrorLogger;
use crate::fetch::Fetcher;
use crate::parse::ResponseParser;
use crate::validate::{sanitize_input, validate_for};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Counts for one batch of inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Inputs that were validated and queried
    pub processed: usize,
    /// Inputs whose lookup succeeded
    pub succeeded: usize,
    /// Inputs that failed validation or lookup
    pub failed: usize,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against stdin/stdout, returning the batch summary
    pub async fn run(&self) -> Result<RunSummary> {
        let config = self.cli.lookup_config()?;
        let fetcher = config.build_fetcher()?;
        let mut logger = ErrorLogger::open(&config.error_log)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.process(&fetcher, &mut logger, stdin.lock(), &mut out)
            .await
    }

    /// Process every input line from `input`, writing data lines to `out`
    pub async fn process<R: BufRead, W: Write>(
        &self,
        fetcher: &Fetcher,
        logger: &mut ErrorLogger,
        input: R,
        out: &mut W,
    ) -> Result<RunSummary> {
        let mode = self.cli.mode();
        let parser = ResponseParser::new(self.cli.verbose);
        let mut summary = RunSummary::default();

        for line in input.lines() {
            let line = line.context("Error reading stdin")?;
            let input = sanitize_input(&line);

            if input.is_empty() || input.starts_with('#') {
                continue;
            }

            if let Err(e) = validate_for(mode, input) {
                self.record_failure(logger, input, &e, &mut summary);
                continue;
            }

            summary.processed += 1;
            debug!("Querying {} {}", mode, input);

            let body = match fetcher.query(mode, input).await {
                Ok(body) => body,
                Err(e) => {
                    self.record_failure(logger, input, &e, &mut summary);
                    continue;
                }
            };

            let page = parser.parse(&body);
            for data in &page.data_lines {
                writeln!(out, "{data}")?;
            }
            summary.succeeded += 1;
        }

        out.flush()?;
        Ok(summary)
    }

    fn record_failure(
        &self,
        logger: &mut ErrorLogger,
        input: &str,
        error: &Error,
        summary: &mut RunSummary,
    ) {
        summary.failed += 1;

        if let Err(e) = logger.log(self.cli.mode(), input, &error.to_string()) {
            warn!("Could not write to {}: {}", logger.path().display(), e);
        }

        if self.cli.verbose {
            if error.is_request_failure() {
                eprintln!("Error querying {input}: {error}");
            } else {
                eprintln!("Error: {error}");
            }
        }
    }
}
