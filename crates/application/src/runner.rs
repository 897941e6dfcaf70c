//! Run orchestration.
//!
//! The runner receives already-read test sources from the discovery
//! layer, expands each into resolved cases, and drives the
//! dispatch → verify → report pipeline for every case. No per-case or
//! per-file failure ever aborts the batch: malformed files and
//! unresolvable cases are skipped, transport failures are reported, and
//! everything else keeps running.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use argonaut_domain::{RequestDescriptor, ResolvedCase, TestFile};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::{RunConfig, RunMode};
use crate::ports::{HttpClient, TransportError};
use crate::report::Reporter;
use crate::verifier::verify;

/// One test file, read to completion by the discovery layer.
#[derive(Debug, Clone)]
pub struct TestSource {
    /// Originating path, used in reports.
    pub path: PathBuf,
    /// Raw file contents.
    pub contents: String,
}

/// Drives the pipeline for a batch of test sources.
#[derive(Clone)]
pub struct Runner {
    config: Arc<RunConfig>,
    http: Arc<dyn HttpClient>,
    reporter: Arc<Reporter>,
}

impl Runner {
    /// Wires a runner from its configuration and ports.
    #[must_use]
    pub fn new(config: RunConfig, http: Arc<dyn HttpClient>, reporter: Arc<Reporter>) -> Self {
        Self {
            config: Arc::new(config),
            http,
            reporter,
        }
    }

    /// Runs every case of every source, honoring the configured mode.
    pub async fn run(&self, sources: Vec<TestSource>) {
        match self.config.mode {
            RunMode::Sync => {
                for source in &sources {
                    for case in Self::expand(source) {
                        self.run_case(&source.path, &case).await;
                    }
                }
            }
            RunMode::Async => self.run_concurrent(sources).await,
        }
    }

    /// Fans every case out as an independent task, bounded by the
    /// concurrency ceiling. Cases have no ordering guarantees across
    /// files; each case still dispatches, verifies, and reports in that
    /// order within its own task.
    async fn run_concurrent(&self, sources: Vec<TestSource>) {
        let semaphore = Arc::new(Semaphore::new(self.config.max_in_flight.max(1)));
        let mut tasks = JoinSet::new();

        for source in sources {
            let path = Arc::new(source.path.clone());
            for case in Self::expand(&source) {
                let runner = self.clone();
                let semaphore = Arc::clone(&semaphore);
                let path = Arc::clone(&path);
                tasks.spawn(async move {
                    // The semaphore is never closed; an Err here would
                    // only drop the bound, not the case.
                    let _permit = semaphore.acquire_owned().await;
                    runner.run_case(&path, &case).await;
                });
            }
        }

        while tasks.join_next().await.is_some() {}
    }

    /// Parses a source and resolves its dispatchable cases.
    ///
    /// A malformed file, an unnamed case, or a case that fails to
    /// resolve all reduce to "skip and continue".
    fn expand(source: &TestSource) -> Vec<ResolvedCase> {
        let file = match TestFile::parse(&source.contents) {
            Ok(file) => file,
            Err(error) => {
                tracing::debug!(
                    file = %source.path.display(),
                    %error,
                    "skipping malformed definition file"
                );
                return Vec::new();
            }
        };

        let mut cases = Vec::new();
        for case in &file.tests {
            let Some(name) = case.dispatch_name() else {
                tracing::debug!(
                    file = %source.path.display(),
                    "skipping unnamed test case"
                );
                continue;
            };

            match ResolvedCase::resolve(&file, case) {
                Ok(resolved) => cases.push(resolved),
                Err(error) => tracing::warn!(
                    test = name,
                    file = %source.path.display(),
                    %error,
                    "skipping unresolvable test case"
                ),
            }
        }
        cases
    }

    async fn run_case(&self, path: &Path, case: &ResolvedCase) {
        let descriptor = match RequestDescriptor::build(case, &self.config.host_overrides) {
            Ok(descriptor) => descriptor,
            Err(error) => {
                self.reporter
                    .transport_failure(
                        &case.name,
                        path,
                        &TransportError::InvalidUrl(error.to_string()),
                    )
                    .await;
                return;
            }
        };

        if case.method.has_body() && !case.parameters.is_empty() {
            // Body construction for non-GET methods is deliberately not
            // done; see DESIGN.md.
            tracing::debug!(
                test = %case.name,
                method = %case.method,
                "parameters are only sent for GET requests"
            );
        }

        tracing::debug!(test = %case.name, target = %descriptor.target_url(), "dispatching");

        match self.http.dispatch(&descriptor).await {
            Ok(exchange) => {
                let outcome = verify(case, exchange.status, &exchange.body);
                self.reporter.outcome(&case.name, path, &outcome).await;
            }
            Err(error) => {
                self.reporter
                    .transport_failure(&case.name, path, &error)
                    .await;
            }
        }
    }
}
