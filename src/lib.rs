#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

//! # Banking database API runner
//!
//! Runs a fixed sequence of GET requests against the banking database REST API,
//! prints a short summary of every response and saves each one as JSON.
//!
//! ## Current functionality
//!  - Query path builder for the filter, pagination and sorting syntax
//!  - Banking (customers/loans) and sample (users/sample_data) suites
//!  - Console summaries with a bounded record preview
//!  - Persisting responses to `api_responses/<label>.json`

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::api::catalog::Suite;
use crate::api::error::ApiError;
use crate::api::persist::Persister;
use crate::api::report::{Reporter, DEFAULT_PREVIEW, RULE_WIDTH};
use crate::api::types::descriptor::QueryDescriptor;
use crate::api::ApiClient;

/// Module for API communication
pub mod api;

/// Address of the API when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Directory responses are written to when nothing else is configured
pub const DEFAULT_OUTPUT_DIR: &str = "api_responses";

/// Settings for a [`QueryRunner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Base URL every query path is appended to
    pub base_url: String,
    /// Directory receiving one JSON file per query
    pub output_dir: PathBuf,
    /// Records printed per response
    pub preview: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            preview: DEFAULT_PREVIEW,
        }
    }
}

/// Files produced by a run, in query order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// One path per completed query
    pub files_written: Vec<PathBuf>,
}

/// Struct to run query sequences against the API
#[derive(Debug, Clone)]
pub struct QueryRunner {
    api: ApiClient,
    reporter: Reporter,
}

impl QueryRunner {
    /// Creates a runner from its configuration
    pub fn new(config: &RunnerConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.base_url)?;
        let reporter =
            Reporter::new(Persister::new(&config.output_dir)).with_preview(config.preview);
        Ok(QueryRunner { api, reporter })
    }

    /// Underlying HTTP client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Directory responses are saved to
    pub fn output_dir(&self) -> &Path {
        self.reporter.persister().output_dir()
    }

    /// Runs every query of `suite`, printing to stdout
    pub async fn run_suite(&self, suite: Suite) -> Result<RunSummary, ApiError> {
        let mut stdout = std::io::stdout();
        self.run(&mut stdout, suite.title(), &suite.queries()).await
    }

    /// Runs `queries` in order, writing console output to `out`
    ///
    /// Stops at the first failing query; nothing after it is requested.
    pub async fn run<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        queries: &[QueryDescriptor],
    ) -> Result<RunSummary, ApiError> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", rule)?;

        self.reporter.persister().ensure_dir()?;

        let mut summary = RunSummary::default();
        for (i, query) in queries.iter().enumerate() {
            writeln!(out, "\n{}. {}", i + 1, query.description)?;
            out.flush()?;
            let body = self.api.get_json(&query.path).await?;
            let path = self.reporter.report(out, &query.label, &body)?;
            summary.files_written.push(path);
        }

        info!("Completed {} queries", summary.files_written.len());
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "✅ All tests completed!")?;
        writeln!(
            out,
            "📁 All responses saved to: {}/",
            self.output_dir().display()
        )?;
        writeln!(out, "{}", rule)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::{QueryRunner, RunnerConfig, DEFAULT_BASE_URL};
    use std::path::Path;

    #[test]
    fn default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_dir, Path::new("api_responses"));
        assert_eq!(config.preview, 3);
    }

    #[test]
    fn runner_from_config() {
        let config = RunnerConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            output_dir: "out".into(),
            preview: 5,
        };
        let runner = QueryRunner::new(&config).unwrap();
        assert_eq!(runner.api().base_url().as_str(), "http://127.0.0.1:9000/");
        assert_eq!(runner.output_dir(), Path::new("out"));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let config = RunnerConfig {
            base_url: "::".to_string(),
            ..Default::default()
        };
        assert!(QueryRunner::new(&config).is_err());
    }
}
