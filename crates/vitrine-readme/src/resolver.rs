//! Detail resolution: inline content first, remote README fallback second.

use std::time::Duration;

use vitrine_catalog::ProjectRecord;

use crate::render::render_markdown;
use crate::rewrite::rewrite_relative_links;

/// Host prefix a repository URL must carry.
const GITHUB_HOST: &str = "https://github.com/";

/// Default raw-content host serving unrendered repository files.
pub const DEFAULT_RAW_HOST: &str = "https://raw.githubusercontent.com";

/// Branch names tried in priority order. The first successful read wins.
const BRANCH_CANDIDATES: [&str; 2] = ["main", "master"];

/// Per-request timeout for raw-content fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// The outcome of resolving a project's long-form content.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedContent {
    /// Resolution has been started but has not completed yet
    Pending,

    /// Displayable HTML is available
    Resolved { html: String },

    /// No content source yielded anything; shown as "content not found"
    NotFound,
}

impl ResolvedContent {
    /// The resolved HTML, if any.
    pub fn html(&self) -> Option<&str> {
        match self {
            ResolvedContent::Resolved { html } => Some(html),
            _ => None,
        }
    }
}

/// Resolves project records into displayable HTML.
///
/// Each resolution is independent: nothing is cached, and at most two
/// outbound requests are made (one per branch candidate).
#[derive(Debug, Clone)]
pub struct ReadmeResolver {
    http: reqwest::Client,
    raw_host: String,
}

impl ReadmeResolver {
    /// Create a resolver against the default raw-content host.
    pub fn new() -> Self {
        Self::with_raw_host(DEFAULT_RAW_HOST)
    }

    /// Create a resolver against a custom raw-content host.
    ///
    /// Tests point this at a local mock server.
    pub fn with_raw_host(raw_host: impl Into<String>) -> Self {
        let raw_host = raw_host.into();
        Self {
            http: reqwest::Client::new(),
            raw_host: raw_host.trim_end_matches('/').to_string(),
        }
    }

    /// Produce displayable HTML for a project record.
    ///
    /// Inline content short-circuits: no network access is attempted. With a
    /// repository URL, branch candidates are fetched strictly in sequence and
    /// the first successful read is authoritative. Transport failures and
    /// non-2xx responses advance to the next candidate; exhaustion is the
    /// user-visible `NotFound`, never an error.
    pub async fn resolve(&self, record: &ProjectRecord) -> ResolvedContent {
        if let Some(markdown) = &record.inline_content {
            return ResolvedContent::Resolved {
                html: render_markdown(markdown),
            };
        }

        let Some(repository) = &record.repository else {
            return ResolvedContent::NotFound;
        };

        let Some(repo_path) = repo_path(repository) else {
            tracing::warn!(
                repository = %repository,
                "Repository URL is not a github.com address; skipping fetch"
            );
            return ResolvedContent::NotFound;
        };

        for branch in BRANCH_CANDIDATES {
            match self.fetch_readme(repo_path, branch).await {
                Ok(markdown) => {
                    tracing::debug!(repo = repo_path, branch, "README fetched");

                    let base_url = format!("{}/{}/{}/", self.raw_host, repo_path, branch);
                    let rewritten = rewrite_relative_links(&markdown, &base_url);

                    return ResolvedContent::Resolved {
                        html: render_markdown(&rewritten),
                    };
                }
                Err(e) => {
                    tracing::debug!(repo = repo_path, branch, error = %e, "Branch candidate failed");
                }
            }
        }

        tracing::info!(repo = repo_path, "No branch candidate yielded a README");
        ResolvedContent::NotFound
    }

    /// Fetch one branch candidate's README.
    async fn fetch_readme(&self, repo_path: &str, branch: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}/{}/README.md", self.raw_host, repo_path, branch);

        let response = self
            .http
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::Transport)
    }
}

impl Default for ReadmeResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// A single branch candidate's failure. Recovered by advancing to the next
/// candidate; never surfaced past the resolver.
#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(reqwest::Error),
}

/// Strip the known host prefix, yielding `<owner>/<repo>`.
fn repo_path(repository: &str) -> Option<&str> {
    repository
        .strip_prefix(GITHUB_HOST)
        .map(|p| p.trim_end_matches('/'))
        .filter(|p| !p.is_empty())
}
